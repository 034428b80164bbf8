use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use super::scan::{scan, MatchResult};
use crate::error::TaskFailure;
use crate::grid::PixelGrid;
use crate::marker::Marker;

/// What one search task produced: the marker's match result, how long the
/// scan took, and which thread ran it (opaque diagnostic text).
#[derive(Debug)]
pub struct SearchOutcome {
    pub marker: String,
    pub result: Result<MatchResult, TaskFailure>,
    pub elapsed: Duration,
    pub thread: String,
}

/// All task outcomes plus the wall-clock time of the concurrent phase.
#[derive(Debug)]
pub struct SearchReport {
    pub outcomes: Vec<SearchOutcome>,
    pub elapsed: Duration,
}

/// Run one search task per marker against the shared grid and wait for all
/// of them.
///
/// Outcomes come back in `markers` order with exactly one entry per marker,
/// no matter which task finishes first. A task that panics turns into a
/// failed outcome; its siblings run to completion and the join still happens.
pub fn search_all(grid: &PixelGrid, markers: &[Marker]) -> SearchReport {
    let run_one = |marker: &Marker| -> SearchOutcome {
        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| scan(grid, &marker.template)))
            .map_err(|payload| TaskFailure(panic_message(payload)));
        SearchOutcome {
            marker: marker.name.to_string(),
            result,
            elapsed: start.elapsed(),
            thread: format!("{:?}", thread::current().id()),
        }
    };

    let start = Instant::now();

    #[cfg(feature = "parallel")]
    let outcomes: Vec<SearchOutcome> = markers.par_iter().map(run_one).collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<SearchOutcome> = markers.iter().map(run_one).collect();

    SearchReport {
        outcomes,
        elapsed: start.elapsed(),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Pixel;
    use crate::marker::{builtin_markers, waldo, Template};

    const BLACK: Pixel = Pixel::new(0, 0, 0);

    fn grid_with(template: &Template, at: (u32, u32), size: (u32, u32)) -> PixelGrid {
        let (width, height) = size;
        let mut pixels = vec![BLACK; (width * height) as usize];
        for dy in 0..template.height() {
            for dx in 0..template.width() {
                pixels[((at.1 + dy) * width + (at.0 + dx)) as usize] = template.get(dx, dy);
            }
        }
        PixelGrid::from_raw(width, height, pixels)
    }

    #[test]
    fn one_outcome_per_marker_in_registry_order() {
        let markers = builtin_markers();
        let grid = PixelGrid::from_raw(1, 1, vec![BLACK]);
        let report = search_all(&grid, &markers);
        assert_eq!(report.outcomes.len(), markers.len());
        for (outcome, marker) in report.outcomes.iter().zip(&markers) {
            assert_eq!(outcome.marker, marker.name);
        }
    }

    #[test]
    fn embedded_marker_found_others_not() {
        let markers = builtin_markers();
        let grid = grid_with(&waldo().template, (1, 1), (4, 4));
        let report = search_all(&grid, &markers);
        for outcome in &report.outcomes {
            let result = outcome.result.as_ref().expect("no task should fail");
            if outcome.marker == "Waldo" {
                assert_eq!(*result, MatchResult::Found { x: 1, y: 1 });
            } else {
                assert_eq!(*result, MatchResult::NotFound);
            }
        }
    }

    #[test]
    fn outcomes_carry_thread_diagnostics() {
        let grid = PixelGrid::from_raw(1, 1, vec![BLACK]);
        let report = search_all(&grid, &builtin_markers());
        for outcome in &report.outcomes {
            assert!(!outcome.thread.is_empty());
        }
    }

    #[test]
    fn repeated_searches_agree() {
        let markers = builtin_markers();
        let grid = grid_with(&waldo().template, (2, 0), (6, 6));
        let collect = |report: &SearchReport| -> Vec<(String, MatchResult)> {
            report
                .outcomes
                .iter()
                .map(|o| (o.marker.clone(), *o.result.as_ref().unwrap()))
                .collect()
        };
        let first = search_all(&grid, &markers);
        let second = search_all(&grid, &markers);
        assert_eq!(collect(&first), collect(&second));
    }

    #[test]
    fn empty_registry_yields_empty_report() {
        let grid = PixelGrid::from_raw(1, 1, vec![BLACK]);
        let report = search_all(&grid, &[]);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn panic_message_formats_common_payloads() {
        assert_eq!(panic_message(Box::new("boom")), "boom");
        assert_eq!(panic_message(Box::new(String::from("bang"))), "bang");
        assert_eq!(panic_message(Box::new(42_u32)), "unknown panic payload");
    }
}

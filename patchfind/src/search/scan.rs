use super::matcher::matches_at;
use crate::grid::PixelGrid;
use crate::marker::Template;

/// Location of the first matching window, or the fact that none exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Found { x: u32, y: u32 },
    NotFound,
}

/// Scan the grid for the first window matching `template`.
///
/// Candidate offsets are visited with the outer loop over x and the inner
/// loop over y, so the reported match has the smallest x of all occurrences,
/// ties broken by the smallest y. Later occurrences are ignored. The scan is
/// a pure read of the grid and always yields the same result for the same
/// inputs.
pub fn scan(grid: &PixelGrid, template: &Template) -> MatchResult {
    if template.width() > grid.width() || template.height() > grid.height() {
        return MatchResult::NotFound;
    }
    for x in 0..=grid.width() - template.width() {
        for y in 0..=grid.height() - template.height() {
            if matches_at(grid, template, x, y) {
                return MatchResult::Found { x, y };
            }
        }
    }
    MatchResult::NotFound
}

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use patchfind::grid::PixelGrid;
use patchfind::marker;
use patchfind::search::coordinator::{search_all, SearchReport};
use patchfind::search::scan::MatchResult;

/// Find pixel-pattern markers in an image by parallel scan
#[derive(Parser)]
#[command(name = "patchfind", version)]
struct Args {
    /// Input image (PNG, JPEG, or BMP); read from a stdin prompt when omitted
    image: Option<String>,

    /// Markers to search for (comma-separated for multiple)
    #[arg(short, long, default_value = "waldo,wilma,odlaw,wizard,woof")]
    markers: String,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct OutputReport {
    file: String,
    image_width: u32,
    image_height: u32,
    decode_ms: u128,
    search_ms: u128,
    total_ms: u128,
    markers: Vec<OutputMarker>,
}

#[derive(Serialize)]
struct OutputMarker {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<[u32; 2]>,
    elapsed_us: u128,
    thread: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Resolve marker names before any file I/O.
    let mut markers = Vec::new();
    for name in args.markers.split(',') {
        let name = name.trim();
        let marker =
            marker::builtin_marker(name).with_context(|| format!("unknown marker: {name}"))?;
        markers.push(marker);
    }

    let path = match &args.image {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };

    let decode_start = Instant::now();
    let grid =
        PixelGrid::load(&path).with_context(|| format!("failed to load image: {path}"))?;
    let decode_time = decode_start.elapsed();

    if !args.quiet {
        eprintln!(
            "scanning {path} ({}x{}) for {} markers",
            grid.width(),
            grid.height(),
            markers.len()
        );
    }

    let report = search_all(&grid, &markers);

    // Everything below runs after the join, so ordering is stable no matter
    // which task finished first.
    if args.json {
        print_json(&args, &path, &grid, decode_time, &report)?;
    } else {
        print_plain(decode_time, &report);
    }

    Ok(())
}

fn prompt_for_path() -> Result<String> {
    println!("Please designate file path to image.");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read image path from stdin")?;
    let path = line.trim();
    anyhow::ensure!(!path.is_empty(), "no image path given");
    Ok(path.to_string())
}

fn print_plain(decode_time: Duration, report: &SearchReport) {
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(MatchResult::Found { x, y }) => println!(
                "{} has been found at: [{x}] [{y}] pixels by thread ID: {}",
                outcome.marker, outcome.thread
            ),
            Ok(MatchResult::NotFound) => {}
            Err(err) => eprintln!("{} search failed: {err}", outcome.marker),
        }
    }
    println!("Parallel time: {} milliseconds.", report.elapsed.as_millis());
    println!(
        "Total Execution time: {} milliseconds.",
        (decode_time + report.elapsed).as_millis()
    );
}

fn print_json(
    args: &Args,
    path: &str,
    grid: &PixelGrid,
    decode_time: Duration,
    report: &SearchReport,
) -> Result<()> {
    let markers = report
        .outcomes
        .iter()
        .map(|outcome| OutputMarker {
            name: outcome.marker.clone(),
            location: match &outcome.result {
                Ok(MatchResult::Found { x, y }) => Some([*x, *y]),
                _ => None,
            },
            elapsed_us: outcome.elapsed.as_micros(),
            thread: outcome.thread.clone(),
            error: outcome.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    let out = OutputReport {
        file: path.to_string(),
        image_width: grid.width(),
        image_height: grid.height(),
        decode_ms: decode_time.as_millis(),
        search_ms: report.elapsed.as_millis(),
        total_ms: (decode_time + report.elapsed).as_millis(),
        markers,
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{json}");
    Ok(())
}

use criterion::{criterion_group, criterion_main, Criterion};

use patchfind::grid::{Pixel, PixelGrid};
use patchfind::marker::{builtin_markers, Marker, Template};
use patchfind::search::coordinator::search_all;
use patchfind::search::scan::scan;

const BLACK: Pixel = Pixel::new(0, 0, 0);

fn embed(pixels: &mut [Pixel], width: u32, template: &Template, x: u32, y: u32) {
    for dy in 0..template.height() {
        for dx in 0..template.width() {
            pixels[((y + dy) * width + (x + dx)) as usize] = template.get(dx, dy);
        }
    }
}

/// VGA-sized scene with every marker embedded along the right edge, so each
/// task walks most of the grid before hitting its target.
fn vga_scene(markers: &[Marker]) -> PixelGrid {
    let (width, height) = (640u32, 480u32);
    let mut pixels = vec![BLACK; (width * height) as usize];
    for (i, marker) in markers.iter().enumerate() {
        let y = 100 + 60 * i as u32;
        embed(&mut pixels, width, &marker.template, width - 2, y);
    }
    PixelGrid::from_raw(width, height, pixels)
}

fn bench_search(c: &mut Criterion) {
    let markers = builtin_markers();
    let grid = vga_scene(&markers);

    c.bench_function("scan_single_640x480", |b| {
        b.iter(|| scan(&grid, &markers[0].template))
    });

    c.bench_function("search_all_640x480", |b| b.iter(|| search_all(&grid, &markers)));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);

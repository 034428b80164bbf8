use crate::grid::PixelGrid;
use crate::marker::Template;

/// Compare `template` against the grid window whose top-left corner is at
/// (x, y). True only when every pixel pair is exactly equal.
///
/// A window that would run past the grid edge never matches; no out-of-bounds
/// read happens for any offset.
pub fn matches_at(grid: &PixelGrid, template: &Template, x: u32, y: u32) -> bool {
    let (tw, th) = (template.width(), template.height());
    if tw > grid.width() || x > grid.width() - tw {
        return false;
    }
    if th > grid.height() || y > grid.height() - th {
        return false;
    }
    for dy in 0..th {
        for dx in 0..tw {
            if grid.get(x + dx, y + dy) != template.get(dx, dy) {
                return false;
            }
        }
    }
    true
}

//! Which grid cells a view rectangle touches.

use macroquad::math::Vec2;
use std::ops::Range;

/// Extra cells drawn past each viewport edge so tiles taller than a cell
/// are not cut off when their base is just below the screen.
const CULL_MARGIN_CELLS: i64 = 4;

/// Visible cells of a layer, as column and row ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    /// Column indices to draw.
    pub cols: Range<usize>,
    /// Row indices to draw.
    pub rows: Range<usize>,
}

/// Cells of a `width` x `height` grid that intersect the world-space view
/// rectangle `[view_min, view_max)`, padded by a margin and clamped to the
/// grid.
pub fn visible_cells(
    view_min: Vec2,
    view_max: Vec2,
    cell: Vec2,
    width: usize,
    height: usize,
) -> CellRange {
    let span = |min: f32, max: f32, size: f32, len: usize| {
        let clamp = |c: i64| c.clamp(0, len as i64) as usize;
        let lo = ((min / size).floor() as i64).saturating_sub(CULL_MARGIN_CELLS);
        let hi = ((max / size).ceil() as i64).saturating_add(CULL_MARGIN_CELLS);
        clamp(lo)..clamp(hi)
    };

    CellRange {
        cols: span(view_min.x, view_max.x, cell.x, width),
        rows: span(view_min.y, view_max.y, cell.y, height),
    }
}

//! Rectangle helpers with strict edge semantics.

use macroquad::math::Rect;

/// Strict overlap: rectangles that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Strict containment of a point inside a rectangle.
#[inline]
pub fn contains_strict(r: &Rect, x: f32, y: f32) -> bool {
    x > r.x && x < r.right() && y > r.y && y < r.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 16.0, 16.0);
        assert!(!overlaps(&a, &Rect::new(16.0, 0.0, 16.0, 16.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 16.0, 16.0, 16.0)));
        assert!(overlaps(&a, &Rect::new(15.0, 15.0, 16.0, 16.0)));
    }

    #[test]
    fn edge_points_are_outside() {
        let r = Rect::new(10.0, 10.0, 16.0, 16.0);
        assert!(!contains_strict(&r, 10.0, 12.0));
        assert!(contains_strict(&r, 11.0, 12.0));
        assert!(!contains_strict(&r, 26.0, 12.0));
    }
}

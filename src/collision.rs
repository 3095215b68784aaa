//! Axis-separated collision against static solid rectangles.
//!
//! Movement is applied one axis at a time: X first, resolved against every
//! collider, then Y. Resolving the axes separately lets a body slide along a
//! wall while moving diagonally.

use crate::geom::overlaps;
use macroquad::math::{Rect, Vec2};

/// Clamps `body` on X after it has moved by `dx`.
///
/// Moving right pins the body's right edge to the collider's left edge;
/// moving left pins its left edge to the collider's right edge. A zero
/// delta leaves the body where it is.
pub fn resolve_horizontal(body: &mut Rect, dx: f32, colliders: &[Rect]) {
    for c in colliders {
        if !overlaps(body, c) {
            continue;
        }
        if dx > 0.0 {
            body.x = c.x - body.w;
        } else if dx < 0.0 {
            body.x = c.right();
        }
    }
}

/// Clamps `body` on Y after it has moved by `dy`.
pub fn resolve_vertical(body: &mut Rect, dy: f32, colliders: &[Rect]) {
    for c in colliders {
        if !overlaps(body, c) {
            continue;
        }
        if dy > 0.0 {
            body.y = c.y - body.h;
        } else if dy < 0.0 {
            body.y = c.bottom();
        }
    }
}

/// Applies `delta` to `body`, resolving X fully before Y is applied.
pub fn move_and_collide(body: &mut Rect, delta: Vec2, colliders: &[Rect]) {
    body.x += delta.x;
    resolve_horizontal(body, delta.x, colliders);
    body.y += delta.y;
    resolve_vertical(body, delta.y, colliders);
}

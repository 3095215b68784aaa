//! Enemy movement towards the player.

use macroquad::math::{vec2, Vec2};

fn axis_step(from: f32, to: f32) -> f32 {
    if from < to {
        1.0
    } else if from > to {
        -1.0
    } else {
        0.0
    }
}

/// Unit step per axis from `from` towards `to`.
///
/// Not normalized: a diagonal step is longer than an axial one.
pub fn follow_step(from: Vec2, to: Vec2) -> Vec2 {
    vec2(axis_step(from.x, to.x), axis_step(from.y, to.y))
}

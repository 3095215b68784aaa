//! Keyboard and mouse state for one frame.

use macroquad::prelude::*;

/// Input state for one frame, decoupled from the engine so the frame step
/// can be driven from tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Left arrow held.
    pub left: bool,
    /// Right arrow held.
    pub right: bool,
    /// Up arrow held.
    pub up: bool,
    /// Down arrow held.
    pub down: bool,
    /// Cursor position in viewport (screen) pixels.
    pub cursor: Vec2,
    /// Primary button went down this frame.
    pub clicked: bool,
}

impl InputSnapshot {
    /// Four-way direction from the held keys. Opposite keys resolve towards
    /// right/down; diagonals are not normalized.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x = -1.0;
        }
        if self.right {
            dir.x = 1.0;
        }
        if self.up {
            dir.y = -1.0;
        }
        if self.down {
            dir.y = 1.0;
        }
        dir
    }

    /// Reads the keyboard and mouse. `view` maps window pixels to viewport
    /// pixels.
    pub fn poll(view: &Camera2D) -> Self {
        let (mx, my) = mouse_position();
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            cursor: view.screen_to_world(vec2(mx, my)),
            clicked: is_mouse_button_pressed(MouseButton::Left),
        }
    }
}

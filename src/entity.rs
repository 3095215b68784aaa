//! Game entities, built from a [`Body`] plus optional combat.

use crate::combat::Combat;
use macroquad::math::{vec2, Rect, Vec2};

/// Position and size of something in the world. Top-left origin, world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner.
    pub pos: Vec2,
    /// Side length; bodies are square.
    pub size: f32,
    /// Movement applied during the last frame.
    pub delta: Vec2,
}

impl Body {
    /// A body at rest.
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            pos: vec2(x, y),
            size,
            delta: Vec2::ZERO,
        }
    }

    /// Bounding box, recomputed from the live position.
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Centre of the bounding box.
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Moves the body to `r`'s origin. The size is unchanged.
    pub fn set_rect(&mut self, r: Rect) {
        self.pos = vec2(r.x, r.y);
    }
}

/// The keyboard-controlled hero.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Position and size.
    pub body: Body,
    /// Pixels per frame.
    pub speed: f32,
    /// Always [`Combat::Basic`].
    pub combat: Combat,
}

/// A skeleton. Followers chase the player; the rest stand still.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    /// Position and size.
    pub body: Body,
    /// Whether it moves towards the player each frame.
    pub follows_player: bool,
    /// Pixels per frame, per axis.
    pub speed: f32,
    /// Always [`Combat::Cooldown`].
    pub combat: Combat,
}

/// Health pickup, consumed on contact.
#[derive(Debug, Clone, PartialEq)]
pub struct Potion {
    /// Position and size.
    pub body: Body,
    /// Health restored.
    pub heal: i32,
}

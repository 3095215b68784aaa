//! Scroll offset that keeps the player centred and the view on the map.

use macroquad::math::{vec2, Vec2};

/// Render offset added to world coordinates to get screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// Horizontal offset; 0 or negative once constrained.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl Camera {
    /// Camera with the given offset.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Centres the target in a viewport of the given size.
    pub fn follow_target(&mut self, target_x: f32, target_y: f32, viewport_w: f32, viewport_h: f32) {
        self.x = viewport_w / 2.0 - target_x;
        self.y = viewport_h / 2.0 - target_y;
    }

    /// Keeps the viewport inside `[0, map_w] x [0, map_h]`.
    ///
    /// When the map is smaller than the viewport on an axis, that axis is
    /// pinned to 0 so the map sits at the top-left corner.
    pub fn constrain(&mut self, map_w: f32, map_h: f32, viewport_w: f32, viewport_h: f32) {
        self.x = self.x.max(viewport_w - map_w).min(0.0);
        self.y = self.y.max(viewport_h - map_h).min(0.0);
    }

    /// The offset as a vector.
    pub fn offset(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// World pixels to viewport pixels.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset()
    }

    /// Viewport pixels to world pixels.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP_W: f32 = 640.0;
    const MAP_H: f32 = 480.0;
    const VIEW_W: f32 = 320.0;
    const VIEW_H: f32 = 240.0;

    fn visible(cam: &Camera) -> (Vec2, Vec2) {
        let min = cam.screen_to_world(Vec2::ZERO);
        (min, min + vec2(VIEW_W, VIEW_H))
    }

    #[test]
    fn centres_target_inside_map() {
        let mut cam = Camera::default();
        cam.follow_target(300.0, 200.0, VIEW_W, VIEW_H);
        cam.constrain(MAP_W, MAP_H, VIEW_W, VIEW_H);
        assert_eq!(cam, Camera::new(-140.0, -80.0));
        assert_eq!(cam.world_to_screen(vec2(300.0, 200.0)), vec2(160.0, 120.0));
    }

    #[test]
    fn viewport_stays_inside_map_for_out_of_bounds_targets() {
        for target in [
            vec2(-500.0, -500.0),
            vec2(5000.0, -20.0),
            vec2(10.0, 9000.0),
            vec2(5000.0, 5000.0),
            vec2(MAP_W, MAP_H),
        ] {
            let mut cam = Camera::default();
            cam.follow_target(target.x, target.y, VIEW_W, VIEW_H);
            cam.constrain(MAP_W, MAP_H, VIEW_W, VIEW_H);
            let (min, max) = visible(&cam);
            assert!(min.x >= 0.0 && min.y >= 0.0, "{target:?} -> {min:?}");
            assert!(max.x <= MAP_W && max.y <= MAP_H, "{target:?} -> {max:?}");
        }
    }

    #[test]
    fn small_map_pins_to_origin() {
        let mut cam = Camera::default();
        cam.follow_target(50.0, 50.0, VIEW_W, VIEW_H);
        cam.constrain(100.0, 100.0, VIEW_W, VIEW_H);
        assert_eq!(cam, Camera::new(0.0, 0.0));
    }

    #[test]
    fn screen_world_round_trip() {
        let cam = Camera::new(-37.0, -12.5);
        let p = vec2(3.0, 4.0);
        assert_eq!(cam.screen_to_world(cam.world_to_screen(p)), p);
    }
}

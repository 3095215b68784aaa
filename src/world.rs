//! World state and the per-frame update step.

use crate::ai::follow_step;
use crate::camera::Camera;
use crate::collision::move_and_collide;
use crate::combat::{Combat, CombatStats};
use crate::config::GameConfig;
use crate::entity::{Body, Enemy, Player, Potion};
use crate::geom::{contains_strict, overlaps};
use crate::input::InputSnapshot;
use crate::map::Map;
use macroquad::math::{Rect, Vec2};
use tracing::{debug, info};

/// Something that happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameEvent {
    /// An enemy hit the player.
    PlayerDamaged {
        /// Player health after the hit.
        health: i32,
    },
    /// Player health reached zero or below. Nothing else happens.
    PlayerDied,
    /// A click landed on an enemy. `enemy` is its index before removal.
    EnemyDamaged {
        /// Index into `World::enemies` at the start of the frame.
        enemy: usize,
        /// Enemy health after the hit.
        health: i32,
    },
    /// The enemy was removed at the end of the frame.
    EnemyEliminated {
        /// Index at the start of the frame.
        enemy: usize,
    },
    /// A potion was consumed.
    PotionPicked {
        /// Player health after healing.
        health: i32,
    },
}

/// Everything the frame step mutates. The draw step only reads it.
#[derive(Debug, Clone)]
pub struct World {
    /// The hero.
    pub player: Player,
    /// Living enemies in spawn order.
    pub enemies: Vec<Enemy>,
    /// Potions not yet picked up.
    pub potions: Vec<Potion>,
    /// Static solid geometry, fixed after construction.
    pub colliders: Vec<Rect>,
    /// Scroll offset, updated at the end of each step.
    pub camera: Camera,
    /// Map size in pixels, for camera clamping.
    pub map_size: Vec2,
    /// Logical viewport size in pixels.
    pub viewport: Vec2,
    /// Click reach in pixels from the player's centre.
    pub attack_radius: f32,
    /// Whether potions can be picked up.
    pub potions_enabled: bool,
    /// Seconds of frame time seen so far.
    pub elapsed: f32,
    /// Frames stepped so far.
    pub frame: u64,
}

impl World {
    /// Spawns entities from the config and gathers the static colliders:
    /// the configured rectangles plus every tile of the collision layer.
    pub fn new(cfg: &GameConfig, map: &Map) -> Self {
        let ts = cfg.tile_size;

        let player = Player {
            body: Body::new(cfg.player.x, cfg.player.y, ts),
            speed: cfg.player.speed,
            combat: Combat::basic(cfg.player.health, cfg.player.attack_power),
        };

        let enemies = cfg
            .enemies
            .iter()
            .map(|e| Enemy {
                body: Body::new(e.x, e.y, ts),
                follows_player: e.follows_player,
                speed: e.speed,
                combat: Combat::cooldown(e.health, e.attack_power, e.cooldown),
            })
            .collect();

        let potions = cfg
            .potions
            .iter()
            .map(|p| Potion {
                body: Body::new(p.x, p.y, ts),
                heal: p.heal,
            })
            .collect();

        let mut colliders: Vec<Rect> = cfg
            .colliders
            .iter()
            .map(|c| Rect::new(c.x, c.y, c.w, c.h))
            .collect();
        colliders.extend(map.colliders_from_layer(&cfg.collision_layer));

        let world = Self {
            player,
            enemies,
            potions,
            colliders,
            camera: Camera::default(),
            map_size: Vec2::new(map.pixel_width(), map.pixel_height()),
            viewport: Vec2::new(cfg.window.viewport_width, cfg.window.viewport_height),
            attack_radius: cfg.attack_radius(),
            potions_enabled: cfg.potions_enabled,
            elapsed: 0.0,
            frame: 0,
        };

        info!(
            enemies = world.enemies.len(),
            potions = world.potions.len(),
            colliders = world.colliders.len(),
            "world spawned"
        );
        world
    }

    /// Advances the world by one frame.
    ///
    /// Movement and cooldowns are counted in frames; `dt` only feeds
    /// `elapsed`.
    pub fn step(&mut self, input: &InputSnapshot, dt: f32) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        self.frame += 1;
        self.elapsed += dt;

        self.move_player(input);
        self.move_enemies();
        self.resolve_combat(input, &mut events);
        if self.potions_enabled {
            self.pick_up_potions(&mut events);
        }
        self.follow_camera();

        events
    }

    fn move_player(&mut self, input: &InputSnapshot) {
        let body = &mut self.player.body;
        body.delta = input.direction() * self.player.speed;
        let mut rect = body.rect();
        move_and_collide(&mut rect, body.delta, &self.colliders);
        body.set_rect(rect);
    }

    fn move_enemies(&mut self) {
        let target = self.player.body.pos;
        for enemy in &mut self.enemies {
            let body = &mut enemy.body;
            body.delta = if enemy.follows_player {
                follow_step(body.pos, target) * enemy.speed
            } else {
                Vec2::ZERO
            };
            let mut rect = body.rect();
            move_and_collide(&mut rect, body.delta, &self.colliders);
            body.set_rect(rect);
        }
    }

    fn resolve_combat(&mut self, input: &InputSnapshot, events: &mut Vec<FrameEvent>) {
        let cursor = self.camera.screen_to_world(input.cursor);
        let player_rect = self.player.body.rect();
        // Reach is measured from the player's centre, not its top-left corner.
        let in_reach = cursor.distance(self.player.body.center()) < self.attack_radius;

        self.player.combat.update();

        let mut dead = Vec::new();
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            enemy.combat.update();
            let rect = enemy.body.rect();

            if overlaps(&rect, &player_rect) && enemy.combat.attack() {
                self.player.combat.damage(enemy.combat.attack_power());
                let health = self.player.combat.health();
                info!(health, "player damaged");
                events.push(FrameEvent::PlayerDamaged { health });
                if self.player.combat.is_dead() {
                    info!("player has died");
                    events.push(FrameEvent::PlayerDied);
                }
            }

            if input.clicked && in_reach && contains_strict(&rect, cursor.x, cursor.y) {
                enemy.combat.damage(self.player.combat.attack_power());
                let health = enemy.combat.health();
                debug!(enemy = index, health, "damaging enemy");
                events.push(FrameEvent::EnemyDamaged {
                    enemy: index,
                    health,
                });
                if enemy.combat.is_dead() {
                    info!(enemy = index, "enemy has been eliminated");
                    events.push(FrameEvent::EnemyEliminated { enemy: index });
                    dead.push(index);
                }
            }
        }

        if !dead.is_empty() {
            let mut index = 0;
            self.enemies.retain(|_| {
                let keep = !dead.contains(&index);
                index += 1;
                keep
            });
        }
    }

    fn pick_up_potions(&mut self, events: &mut Vec<FrameEvent>) {
        let player_rect = self.player.body.rect();
        let combat = &mut self.player.combat;
        self.potions.retain(|potion| {
            if !overlaps(&potion.body.rect(), &player_rect) {
                return true;
            }
            combat.heal(potion.heal);
            let health = combat.health();
            info!(health, "picked up potion");
            events.push(FrameEvent::PotionPicked { health });
            false
        });
    }

    fn follow_camera(&mut self) {
        let target = self.player.body.center();
        self.camera
            .follow_target(target.x, target.y, self.viewport.x, self.viewport.y);
        self.camera
            .constrain(self.map_size.x, self.map_size.y, self.viewport.x, self.viewport.y);
    }
}

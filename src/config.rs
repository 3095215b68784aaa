//! Game configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. The defaults describe the stock spawn map.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "assets/game.json";

/// Window and viewport sizes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Window size in screen pixels.
    pub width: i32,
    /// Window height in screen pixels.
    pub height: i32,
    /// Logical resolution the world is drawn at, scaled to the window.
    pub viewport_width: f32,
    /// Logical height; see `viewport_width`.
    pub viewport_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "RPG".into(),
            width: 640,
            height: 480,
            viewport_width: 320.0,
            viewport_height: 240.0,
        }
    }
}

/// Player spawn and stats.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Spawn position, top-left, world pixels.
    pub x: f32,
    /// Spawn y.
    pub y: f32,
    /// Starting health.
    pub health: i32,
    /// Damage per click hit.
    pub attack_power: i32,
    /// Pixels per frame.
    pub speed: f32,
    /// Sprite path.
    pub image: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: 50.0,
            y: 50.0,
            health: 3,
            attack_power: 1,
            speed: 2.0,
            image: "assets/images/ninja.png".into(),
        }
    }
}

/// One enemy to spawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemySpawn {
    /// Spawn position, top-left, world pixels.
    pub x: f32,
    /// Spawn y.
    pub y: f32,
    /// Chases the player when set.
    pub follows_player: bool,
    /// Starting health.
    pub health: i32,
    /// Damage per hit on the player.
    pub attack_power: i32,
    /// Frames between hits.
    pub cooldown: u32,
    /// Pixels per frame, per axis.
    pub speed: f32,
}

impl Default for EnemySpawn {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            follows_player: true,
            health: 3,
            attack_power: 1,
            cooldown: 30,
            speed: 1.0,
        }
    }
}

impl EnemySpawn {
    fn at(x: f32, y: f32, follows_player: bool) -> Self {
        Self {
            x,
            y,
            follows_player,
            ..Default::default()
        }
    }
}

/// One potion to spawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PotionSpawn {
    /// Spawn position, top-left, world pixels.
    pub x: f32,
    /// Spawn y.
    pub y: f32,
    /// Health restored on pickup.
    pub heal: i32,
}

impl Default for PotionSpawn {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heal: 1,
        }
    }
}

/// Extra solid rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColliderConfig {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

/// Top-level config document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Entity size in pixels; also the unit of the attack radius.
    pub tile_size: f32,
    /// Window and viewport.
    pub window: WindowConfig,
    /// Tiled JSON map path.
    pub map: String,
    /// Tile layer whose non-empty tiles are solid.
    pub collision_layer: String,
    /// Solids added on top of the collision layer.
    pub colliders: Vec<ColliderConfig>,
    /// Player spawn and stats.
    pub player: PlayerConfig,
    /// Enemies in spawn order; indices in frame events refer to this order.
    pub enemies: Vec<EnemySpawn>,
    /// Sprite shared by all enemies.
    pub enemy_image: String,
    /// Potion pickup is off unless switched on here.
    pub potions_enabled: bool,
    /// Potions to spawn when enabled.
    pub potions: Vec<PotionSpawn>,
    /// Sprite shared by all potions.
    pub potion_image: String,
    /// Click-attack reach, in tiles from the player's centre.
    pub attack_radius_tiles: f32,
    /// Outline static colliders in red.
    pub debug_colliders: bool,
    /// Clear colour, RGB.
    pub background: [u8; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 16.0,
            window: WindowConfig::default(),
            map: "assets/maps/spawn.json".into(),
            collision_layer: "collision".into(),
            colliders: vec![ColliderConfig {
                x: 100.0,
                y: 100.0,
                w: 16.0,
                h: 16.0,
            }],
            player: PlayerConfig::default(),
            enemies: vec![
                EnemySpawn::at(100.0, 100.0, true),
                EnemySpawn::at(150.0, 150.0, false),
                EnemySpawn::at(75.0, 75.0, true),
            ],
            enemy_image: "assets/images/skeleton.png".into(),
            potions_enabled: false,
            potions: vec![PotionSpawn {
                x: 210.0,
                y: 50.0,
                heal: 1,
            }],
            potion_image: "assets/images/potion.png".into(),
            attack_radius_tiles: 5.0,
            debug_colliders: true,
            background: [120, 180, 255],
        }
    }
}

impl GameConfig {
    /// Parses and validates a config document. `path` is only used in errors.
    pub fn from_str(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads a config file. Any failure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_str(&txt, path)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Loads `explicit` if given (failing hard), else the default path if it
    /// exists, else the built-in defaults.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => {
                info!("no config file, using defaults");
                let cfg = Self::default();
                cfg.validate()?;
                Ok(cfg)
            }
        }
    }

    /// Rejects non-positive sizes and speeds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid("tile_size must be positive".into()));
        }
        if self.window.viewport_width <= 0.0 || self.window.viewport_height <= 0.0 {
            return Err(ConfigError::Invalid("viewport must be positive".into()));
        }
        if self.player.speed <= 0.0 {
            return Err(ConfigError::Invalid("player speed must be positive".into()));
        }
        if let Some(i) = self.enemies.iter().position(|e| e.speed <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "enemy {i} speed must be positive"
            )));
        }
        Ok(())
    }

    /// Click reach in world pixels.
    pub fn attack_radius(&self) -> f32 {
        self.tile_size * self.attack_radius_tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_spawn() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.enemies.len(), 3);
        assert!(!cfg.enemies[1].follows_player);
        assert_eq!(cfg.enemies[0].cooldown, 30);
        assert_eq!(cfg.attack_radius(), 80.0);
        assert!(!cfg.potions_enabled);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let cfg = GameConfig::from_str(
            r#"{"potions_enabled": true, "player": {"health": 7}, "enemies": [{"x": 3}]}"#,
            Path::new("inline.json"),
        )
        .expect("parse");
        assert!(cfg.potions_enabled);
        assert_eq!(cfg.player.health, 7);
        assert_eq!(cfg.player.speed, 2.0);
        assert_eq!(cfg.enemies.len(), 1);
        assert_eq!(cfg.enemies[0].x, 3.0);
        assert_eq!(cfg.enemies[0].cooldown, 30);
    }

    #[test]
    fn rejects_bad_values() {
        let err = GameConfig::from_str(r#"{"tile_size": 0}"#, Path::new("c.json"))
            .expect_err("zero tile size");
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_str(r#"{"tile_size": "big"}"#, Path::new("c.json"))
            .expect_err("mistyped tile size");
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn explicit_missing_file_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = GameConfig::resolve(Some(dir.path().join("nope.json"))).expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

#![warn(missing_docs)]

//! Tile-based action-RPG prototype on Macroquad.
//!
//! The map loader, collision, combat, AI, camera and the frame step are
//! engine-independent and run without a window; [`render`] and
//! [`InputSnapshot::poll`] are the only parts that talk to macroquad's
//! context.

mod error;
mod ir_map;
mod loader {
    pub mod json_loader;
}
pub mod ai;
pub mod camera;
pub mod collision;
pub mod combat;
pub mod config;
pub mod entity;
pub mod geom;
pub mod input;
pub mod map;
pub mod render;
pub mod tileset;
pub mod world;

pub use camera::Camera;
pub use combat::{BasicCombat, Combat, CombatStats, CooldownCombat};
pub use config::GameConfig;
pub use error::{ConfigError, MapError};
pub use input::InputSnapshot;
pub use ir_map::{IrTileImage, IrTileset};
pub use map::{Map, TileLayer};
pub use tileset::{ResolvedTile, TileId, TileSource, TilesetResolver};
pub use world::{FrameEvent, World};

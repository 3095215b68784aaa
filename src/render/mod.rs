//! Texture loading and drawing. Everything here needs a macroquad context.

pub mod cull;

use crate::config::GameConfig;
use crate::entity::Body;
use crate::ir_map::IrTileset;
use crate::map::Map;
use crate::tileset::TileSource;
use crate::world::World;
use anyhow::Context;
use cull::visible_cells;
use macroquad::prelude::*;
use std::collections::BTreeSet;
use tracing::{info, warn};

enum TilesetTextures {
    Atlas(Texture2D),
    Collection(Vec<Texture2D>),
}

/// GPU textures for the map and the entity sprites, loaded once at startup.
pub struct Assets {
    tilesets: Vec<TilesetTextures>,
    player: Texture2D,
    enemy: Texture2D,
    potion: Texture2D,
}

async fn texture(path: &str) -> anyhow::Result<Texture2D> {
    let tex = load_texture(path)
        .await
        .with_context(|| format!("Loading texture {}", path))?;
    tex.set_filter(FilterMode::Nearest);
    Ok(tex)
}

impl Assets {
    /// Loads every tileset image and the three sprites. Fails on the first
    /// missing file.
    pub async fn load(cfg: &GameConfig, map: &Map) -> anyhow::Result<Self> {
        let mut tilesets = Vec::with_capacity(map.resolver.tilesets().len());
        for ts in map.resolver.tilesets() {
            let textures = match ts {
                IrTileset::Atlas { image, .. } => TilesetTextures::Atlas(texture(image).await?),
                IrTileset::Collection { tiles, .. } => {
                    let mut texs = Vec::with_capacity(tiles.len());
                    for tile in tiles {
                        texs.push(texture(&tile.image).await?);
                    }
                    TilesetTextures::Collection(texs)
                }
            };
            tilesets.push(textures);
        }

        let unknown: BTreeSet<u32> = map
            .tiles()
            .filter(|t| map.resolve(t.id).is_none())
            .map(|t| t.id.clean())
            .collect();
        for gid in unknown {
            warn!(gid, "no tileset for tile id, it will not be drawn");
        }

        let assets = Self {
            tilesets,
            player: texture(&cfg.player.image).await?,
            enemy: texture(&cfg.enemy_image).await?,
            potion: texture(&cfg.potion_image).await?,
        };
        info!(tilesets = assets.tilesets.len(), "textures loaded");
        Ok(assets)
    }
}

/// Camera mapping viewport pixels onto the whole window.
pub fn view_camera(viewport: Vec2) -> Camera2D {
    Camera2D {
        target: viewport / 2.0,
        zoom: vec2(2.0 / viewport.x, 2.0 / viewport.y),
        ..Default::default()
    }
}

fn draw_map(world: &World, map: &Map, assets: &Assets) {
    let view_min = world.camera.screen_to_world(Vec2::ZERO);
    let view_max = view_min + world.viewport;
    let cell = vec2(map.tile_w as f32, map.tile_h as f32);

    for layer in map.layers.iter().filter(|l| l.visible) {
        let range = visible_cells(view_min, view_max, cell, layer.width, layer.height);
        for row in range.rows.clone() {
            for col in range.cols.clone() {
                let Some(id) = layer.get(col, row).filter(|id| !id.is_empty()) else {
                    continue;
                };
                let Some(tile) = map.resolve(id) else {
                    continue;
                };
                let pos = map.cell_origin(col, row) + tile.draw_offset(cell.y);
                let dest = world.camera.world_to_screen(pos);

                match (&assets.tilesets[tile.tileset], tile.source) {
                    (TilesetTextures::Atlas(tex), TileSource::Atlas { src }) => {
                        draw_texture_ex(
                            tex,
                            dest.x,
                            dest.y,
                            WHITE,
                            DrawTextureParams {
                                source: Some(src),
                                ..Default::default()
                            },
                        );
                    }
                    (TilesetTextures::Collection(texs), TileSource::Image { image, .. }) => {
                        draw_texture(&texs[image], dest.x, dest.y, WHITE);
                    }
                    _ => {}
                }
            }
        }
    }
}

fn draw_sprite(world: &World, tex: &Texture2D, body: &Body) {
    let dest = world.camera.world_to_screen(body.pos);
    draw_texture_ex(
        tex,
        dest.x,
        dest.y,
        WHITE,
        DrawTextureParams {
            source: Some(Rect::new(0.0, 0.0, body.size, body.size)),
            ..Default::default()
        },
    );
}

/// Draws one frame. Reads the world, never mutates it.
pub fn draw_world(world: &World, map: &Map, assets: &Assets, cfg: &GameConfig) {
    let [r, g, b] = cfg.background;
    clear_background(Color::from_rgba(r, g, b, 255));
    set_camera(&view_camera(world.viewport));

    draw_map(world, map, assets);

    draw_sprite(world, &assets.player, &world.player.body);
    for enemy in &world.enemies {
        draw_sprite(world, &assets.enemy, &enemy.body);
    }
    for potion in &world.potions {
        draw_sprite(world, &assets.potion, &potion.body);
    }

    if cfg.debug_colliders {
        for c in &world.colliders {
            let p = world.camera.world_to_screen(vec2(c.x, c.y));
            draw_rectangle_lines(p.x, p.y, c.w, c.h, 1.0, RED);
        }
    }

    set_default_camera();
}

//! Loaded tile maps.

use crate::error::MapError;
use crate::ir_map::*;
use crate::loader::json_loader::decode_map_file_to_ir;
use crate::tileset::{ResolvedTile, TileId, TilesetResolver};
use macroquad::math::{vec2, Rect, Vec2};
use std::path::{Path, PathBuf};
use tracing::info;

/// One grid of tile IDs, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// Layer name from the map file; may be empty.
    pub name: String,
    /// Hidden layers are not drawn but still provide colliders.
    pub visible: bool,
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Raw GIDs, flip flags included. `width * height` long.
    pub data: Vec<u32>,
}

impl TileLayer {
    /// Tile at a cell, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<TileId> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied().map(TileId)
    }
}

/// A placed, non-empty tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    /// Index into [`Map::layers`].
    pub layer: usize,
    /// Cell column.
    pub col: usize,
    /// Cell row.
    pub row: usize,
    /// GID as stored, flip flags included.
    pub id: TileId,
}

/// Loaded tile map. Immutable after load.
#[derive(Debug, Clone)]
pub struct Map {
    /// Tile layers in draw order. Other layer kinds are dropped at load.
    pub layers: Vec<TileLayer>,
    /// Tilesets, sorted by first GID.
    pub resolver: TilesetResolver,
    /// Cell width in pixels, never 0.
    pub tile_w: u32,
    /// Cell height in pixels, never 0.
    pub tile_h: u32,
    /// Directory the map was loaded from.
    pub base_dir: PathBuf,
}

impl Map {
    /// Loads a Tiled JSON map and its external tilesets.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let (ir, base) = decode_map_file_to_ir(path.as_ref())?;
        let map = Self::from_ir(ir, base);
        info!(
            path = %path.as_ref().display(),
            width = map.pixel_width(),
            height = map.pixel_height(),
            "map loaded"
        );
        Ok(map)
    }

    pub(crate) fn from_ir(ir: IrMap, base_dir: PathBuf) -> Self {
        let layers = ir
            .layers
            .into_iter()
            .filter_map(|l| match l.kind {
                IrLayerKind::Tiles {
                    width,
                    height,
                    data,
                } => Some(TileLayer {
                    name: l.name,
                    visible: l.visible,
                    width,
                    height,
                    data,
                }),
                IrLayerKind::Unsupported => None,
            })
            .collect();

        Self {
            layers,
            resolver: TilesetResolver::new(ir.tilesets),
            tile_w: ir.tile_w,
            tile_h: ir.tile_h,
            base_dir,
        }
    }

    /// Width in pixels, from the first layer.
    pub fn pixel_width(&self) -> f32 {
        self.layers
            .first()
            .map_or(0.0, |l| l.width as f32 * self.tile_w as f32)
    }

    /// Height in pixels, from the first layer.
    pub fn pixel_height(&self) -> f32 {
        self.layers
            .first()
            .map_or(0.0, |l| l.height as f32 * self.tile_h as f32)
    }

    /// First layer with this name.
    pub fn layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Non-empty tiles, back layer first, each layer row-major.
    pub fn tiles(&self) -> impl Iterator<Item = PlacedTile> + '_ {
        self.layers.iter().enumerate().flat_map(|(layer, l)| {
            l.data.iter().enumerate().filter_map(move |(idx, &gid)| {
                let id = TileId(gid);
                (!id.is_empty()).then(|| PlacedTile {
                    layer,
                    col: idx % l.width,
                    row: idx / l.width,
                    id,
                })
            })
        })
    }

    /// Top-left world position of a cell.
    pub fn cell_origin(&self, col: usize, row: usize) -> Vec2 {
        vec2(
            col as f32 * self.tile_w as f32,
            row as f32 * self.tile_h as f32,
        )
    }

    /// See [`TilesetResolver::resolve`].
    pub fn resolve(&self, id: TileId) -> Option<ResolvedTile> {
        self.resolver.resolve(id)
    }

    /// One tile-sized solid per non-empty tile of the named layer. An absent
    /// layer yields no colliders.
    pub fn colliders_from_layer(&self, name: &str) -> Vec<Rect> {
        let Some(layer) = self.layer(name) else {
            return Vec::new();
        };
        let (tw, th) = (self.tile_w as f32, self.tile_h as f32);
        layer
            .data
            .iter()
            .enumerate()
            .filter(|&(_, &gid)| !TileId(gid).is_empty())
            .map(|(idx, _)| {
                let origin = self.cell_origin(idx % layer.width, idx / layer.width);
                Rect::new(origin.x, origin.y, tw, th)
            })
            .collect()
    }
}

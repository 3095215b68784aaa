// src/loader/json_loader.rs
use crate::error::MapError;
use crate::ir_map::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_TILE_SIZE: u32 = 16;

#[derive(Deserialize)]
struct JsonLayer {
    #[serde(default)]
    data: Vec<u32>,
    #[serde(default)]
    width: usize,
    #[serde(default)]
    height: usize,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    kind: Option<String>, // "tilelayer" expected here
}

fn default_true() -> bool {
    true
}
fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

#[derive(Deserialize)]
struct JsonTilesetRef {
    firstgid: u32,
    source: String,
}

#[derive(Deserialize)]
struct JsonMap {
    #[serde(default = "default_tile_size")]
    tilewidth: u32,
    #[serde(default = "default_tile_size")]
    tileheight: u32,
    layers: Vec<JsonLayer>,
    #[serde(default)]
    tilesets: Vec<JsonTilesetRef>,
}

#[derive(Deserialize)]
struct ExternalTileset {
    #[serde(default)]
    tilewidth: u32,
    #[serde(default)]
    tileheight: u32,
    #[serde(default)]
    tilecount: u32,
    #[serde(default)]
    columns: u32,
    image: Option<String>,
    #[serde(default)]
    spacing: u32,
    #[serde(default)]
    margin: u32,
    #[serde(default)]
    tiles: Vec<JsonTile>,
}

#[derive(Deserialize)]
struct JsonTile {
    id: u32,
    image: Option<String>,
    #[serde(default)]
    imagewidth: u32,
    #[serde(default)]
    imageheight: u32,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, MapError> {
    let txt = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&txt).map_err(|source| MapError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn join_rel(dir: &Path, rel: &str) -> String {
    dir.join(rel).to_string_lossy().into_owned()
}

fn tileset_to_ir(
    ext: ExternalTileset,
    first_gid: u32,
    ts_path: &Path,
    map_dir: &Path,
) -> Result<IrTileset, MapError> {
    let invalid = |reason: &str| MapError::InvalidTileset {
        path: ts_path.to_path_buf(),
        reason: reason.to_owned(),
    };

    // Image paths inside a tileset are relative to the tileset file itself.
    let ts_dir = ts_path.parent().unwrap_or(map_dir);

    if let Some(image) = ext.image {
        if ext.columns == 0 || ext.tilewidth == 0 || ext.tileheight == 0 {
            return Err(invalid("atlas needs non-zero columns, tilewidth and tileheight"));
        }
        return Ok(IrTileset::Atlas {
            first_gid,
            image: join_rel(ts_dir, &image),
            tile_w: ext.tilewidth,
            tile_h: ext.tileheight,
            tilecount: ext.tilecount,
            columns: ext.columns,
            spacing: ext.spacing,
            margin: ext.margin,
        });
    }

    if ext.tiles.is_empty() {
        return Err(invalid("no atlas image and no per-tile images"));
    }

    let mut tiles = Vec::with_capacity(ext.tiles.len());
    for tile in ext.tiles {
        let Some(image) = tile.image else {
            return Err(MapError::InvalidTileset {
                path: ts_path.to_path_buf(),
                reason: format!("tile {} has no image", tile.id),
            });
        };
        tiles.push(IrTileImage {
            id: tile.id,
            image: join_rel(ts_dir, &image),
            width: tile.imagewidth,
            height: tile.imageheight,
        });
    }
    tiles.sort_by_key(|t| t.id);

    Ok(IrTileset::Collection { first_gid, tiles })
}

pub fn decode_map_file_to_ir(path: &Path) -> Result<(IrMap, PathBuf), MapError> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(MapError::InvalidMap(format!(
            "Map file must be a JSON file: {}",
            path.display()
        )));
    }

    let j: JsonMap = read_json(path)?;
    if j.tilewidth == 0 || j.tileheight == 0 {
        return Err(MapError::InvalidMap(format!(
            "Map tile size must be non-zero, got {}x{}: {}",
            j.tilewidth,
            j.tileheight,
            path.display()
        )));
    }

    let map_dir = path
        .parent()
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./"));

    let mut ir_tilesets = Vec::with_capacity(j.tilesets.len());
    for ts in &j.tilesets {
        if ts.firstgid == 0 {
            return Err(MapError::InvalidMap(format!(
                "Tileset {} has firstgid 0",
                ts.source
            )));
        }
        if !ts.source.ends_with(".json") {
            return Err(MapError::InvalidMap(format!(
                "External tileset must be JSON: {}",
                ts.source
            )));
        }
        let ts_path = map_dir.join(&ts.source);
        let ext: ExternalTileset = read_json(&ts_path)?;
        let ir = tileset_to_ir(ext, ts.firstgid, &ts_path, &map_dir)?;
        debug!(source = %ts.source, first_gid = ts.firstgid, "tileset decoded");
        ir_tilesets.push(ir);
    }

    // Sort by first_gid so the resolver can binary search
    ir_tilesets.sort_by_key(IrTileset::first_gid);

    let mut ir_layers = Vec::with_capacity(j.layers.len());
    for l in j.layers {
        let kind = match l.kind.as_deref().unwrap_or("tilelayer") {
            "tilelayer" => {
                let Some(expected) = l.width.checked_mul(l.height) else {
                    return Err(MapError::InvalidMap(format!(
                        "Layer '{}' is too large: {}x{}",
                        l.name, l.width, l.height
                    )));
                };
                if expected == 0 || l.data.len() != expected {
                    return Err(MapError::InvalidLayerSize {
                        layer: l.name,
                        expected,
                        actual: l.data.len(),
                    });
                }
                IrLayerKind::Tiles {
                    width: l.width,
                    height: l.height,
                    data: l.data,
                }
            }
            _ => IrLayerKind::Unsupported,
        };
        ir_layers.push(IrLayer {
            name: l.name,
            visible: l.visible,
            kind,
        });
    }

    if !ir_layers
        .iter()
        .any(|l| matches!(l.kind, IrLayerKind::Tiles { .. }))
    {
        return Err(MapError::NoLayer);
    }

    info!(
        path = %path.display(),
        layers = ir_layers.len(),
        tilesets = ir_tilesets.len(),
        "map decoded"
    );

    Ok((
        IrMap {
            tile_w: j.tilewidth,
            tile_h: j.tileheight,
            tilesets: ir_tilesets,
            layers: ir_layers,
        },
        map_dir,
    ))
}

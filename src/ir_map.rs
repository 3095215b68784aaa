// src/ir_map.rs

/// Canonical, format-agnostic map.
#[derive(Debug, Clone)]
pub struct IrMap {
    pub tile_w: u32,
    pub tile_h: u32,
    pub tilesets: Vec<IrTileset>, // must be sorted by first_gid
    pub layers: Vec<IrLayer>,     // draw order: array order
}

/// A tileset as referenced from a map. Image paths are already joined with
/// the map directory.
#[derive(Debug, Clone, PartialEq)]
pub enum IrTileset {
    /// One image atlas with a regular grid.
    Atlas {
        /// GID of the first tile.
        first_gid: u32,
        /// Atlas image path.
        image: String,
        /// Tile width in pixels.
        tile_w: u32,
        /// Tile height in pixels.
        tile_h: u32,
        /// Number of tiles; local IDs at or past this are unknown.
        tilecount: u32,
        /// Tiles per atlas row.
        columns: u32,
        /// Pixels between tiles; 0 if not used.
        spacing: u32,
        /// Pixels around the atlas edge; 0 if not used.
        margin: u32,
    },
    /// One image per tile; tiles may be larger than a grid cell.
    Collection {
        /// GID of the first tile.
        first_gid: u32,
        /// Tiles with an image; IDs may have gaps.
        tiles: Vec<IrTileImage>,
    },
}

impl IrTileset {
    /// GID of the tileset's first tile.
    pub fn first_gid(&self) -> u32 {
        match self {
            IrTileset::Atlas { first_gid, .. } | IrTileset::Collection { first_gid, .. } => {
                *first_gid
            }
        }
    }
}

/// One tile of an image-collection tileset.
#[derive(Debug, Clone, PartialEq)]
pub struct IrTileImage {
    /// Local tile ID.
    pub id: u32,
    /// Image path.
    pub image: String,
    /// Image size in pixels.
    pub width: u32,
    /// Image height; may exceed the cell height.
    pub height: u32,
}

#[derive(Debug, Clone)]
pub enum IrLayerKind {
    Tiles {
        width: usize,
        height: usize,
        data: Vec<u32>, // raw GIDs (including flip flags ok)
    },
    Unsupported,
}

#[derive(Debug, Clone)]
pub struct IrLayer {
    pub name: String,
    pub visible: bool,
    pub kind: IrLayerKind,
}

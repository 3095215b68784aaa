//! Global tile ID resolution across a map's tilesets.

use crate::ir_map::IrTileset;
use macroquad::math::{vec2, Rect, Vec2};

const FLIP_H: u32 = 0x8000_0000; // bit 31
const FLIP_V: u32 = 0x4000_0000; // bit 30
const FLIP_D: u32 = 0x2000_0000; // bit 29

/// Global tile ID as stored in layer data, possibly carrying Tiled flip flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

impl TileId {
    /// ID with the flip flags masked off.
    #[inline]
    pub fn clean(self) -> u32 {
        self.0 & !(FLIP_H | FLIP_V | FLIP_D)
    }

    /// `true` for the empty tile.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.clean() == 0
    }
}

/// Where to find the pixels for one tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileSource {
    /// A sub-rectangle of the tileset's atlas image.
    Atlas {
        /// Source rectangle in the atlas
        src: Rect,
    },
    /// A standalone image of a collection tileset.
    Image {
        /// Index into the tileset's image list
        image: usize,
        /// Image size in pixels
        size: Vec2,
    },
}

/// Result of resolving a global tile ID.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTile {
    /// Index of the responsible tileset (in ascending `first_gid` order)
    pub tileset: usize,
    /// `gid - first_gid`
    pub local_id: u32,
    /// Pixels to draw
    pub source: TileSource,
}

impl ResolvedTile {
    /// Offset from a cell's top-left corner to where the tile image is drawn.
    /// Tiles taller than a cell extend upward from the cell's bottom edge.
    pub fn draw_offset(&self, cell_h: f32) -> Vec2 {
        match self.source {
            TileSource::Atlas { src } => vec2(0.0, cell_h - src.h),
            TileSource::Image { size, .. } => vec2(0.0, cell_h - size.y),
        }
    }
}

/// Maps global tile IDs to tilesets, picking the tileset with the largest
/// `first_gid` not above the ID.
#[derive(Debug, Clone)]
pub struct TilesetResolver {
    tilesets: Vec<IrTileset>,
}

impl TilesetResolver {
    /// Builds a resolver; tilesets are sorted by `first_gid` here.
    pub fn new(mut tilesets: Vec<IrTileset>) -> Self {
        tilesets.sort_by_key(IrTileset::first_gid);
        Self { tilesets }
    }

    /// Tileset descriptors in ascending `first_gid` order.
    pub fn tilesets(&self) -> &[IrTileset] {
        &self.tilesets
    }

    /// Resolves a tile; `None` for the empty tile and for IDs no tileset owns.
    pub fn resolve(&self, gid: TileId) -> Option<ResolvedTile> {
        let gid = gid.clean();
        if gid == 0 {
            return None;
        }

        let idx = self
            .tilesets
            .partition_point(|t| t.first_gid() <= gid)
            .checked_sub(1)?;
        let ts = &self.tilesets[idx];
        let local_id = gid - ts.first_gid();

        let source = match ts {
            IrTileset::Atlas {
                tile_w,
                tile_h,
                tilecount,
                columns,
                spacing,
                margin,
                ..
            } => {
                if *tilecount != 0 && local_id >= *tilecount {
                    return None;
                }
                let col = local_id % columns;
                let row = local_id / columns;
                let sx = margin + col * (tile_w + spacing);
                let sy = margin + row * (tile_h + spacing);
                TileSource::Atlas {
                    src: Rect::new(sx as f32, sy as f32, *tile_w as f32, *tile_h as f32),
                }
            }
            IrTileset::Collection { tiles, .. } => {
                let image = tiles.binary_search_by_key(&local_id, |t| t.id).ok()?;
                let tile = &tiles[image];
                TileSource::Image {
                    image,
                    size: vec2(tile.width as f32, tile.height as f32),
                }
            }
        };

        Some(ResolvedTile {
            tileset: idx,
            local_id,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir_map::IrTileImage;

    fn resolver() -> TilesetResolver {
        TilesetResolver::new(vec![
            IrTileset::Collection {
                first_gid: 261,
                tiles: vec![
                    IrTileImage {
                        id: 0,
                        image: "tree.png".into(),
                        width: 16,
                        height: 32,
                    },
                    IrTileImage {
                        id: 3,
                        image: "house.png".into(),
                        width: 48,
                        height: 64,
                    },
                ],
            },
            IrTileset::Atlas {
                first_gid: 1,
                image: "floor.png".into(),
                tile_w: 16,
                tile_h: 16,
                tilecount: 260,
                columns: 22,
                spacing: 0,
                margin: 0,
            },
        ])
    }

    #[test]
    fn empty_tile_resolves_to_nothing() {
        assert_eq!(resolver().resolve(TileId(0)), None);
    }

    #[test]
    fn picks_largest_first_gid_not_above_id() {
        let r = resolver();

        let t = r.resolve(TileId(1)).expect("first atlas tile");
        assert_eq!((t.tileset, t.local_id), (0, 0));
        assert_eq!(t.source, TileSource::Atlas { src: Rect::new(0.0, 0.0, 16.0, 16.0) });

        let t = r.resolve(TileId(24)).expect("second atlas row");
        assert_eq!(t.local_id, 23);
        assert_eq!(t.source, TileSource::Atlas { src: Rect::new(16.0, 16.0, 16.0, 16.0) });

        let t = r.resolve(TileId(264)).expect("collection tile");
        assert_eq!((t.tileset, t.local_id), (1, 3));
        assert_eq!(t.source, TileSource::Image { image: 1, size: vec2(48.0, 64.0) });
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let r = resolver();
        // inside the collection's range but no such tile
        assert_eq!(r.resolve(TileId(262)), None);
        // past the last tile of the collection
        assert_eq!(r.resolve(TileId(10_000)), None);
    }

    #[test]
    fn flip_flags_are_masked() {
        let t = resolver()
            .resolve(TileId(0x8000_0000 | 2))
            .expect("flipped tile");
        assert_eq!(t.local_id, 1);
    }

    #[test]
    fn tall_tiles_draw_upward_from_cell_bottom() {
        let t = resolver().resolve(TileId(261)).expect("tree");
        assert_eq!(t.draw_offset(16.0), vec2(0.0, -16.0));
    }

    #[test]
    fn ids_below_every_first_gid_are_unknown() {
        let r = TilesetResolver::new(vec![IrTileset::Atlas {
            first_gid: 10,
            image: "a.png".into(),
            tile_w: 16,
            tile_h: 16,
            tilecount: 4,
            columns: 2,
            spacing: 0,
            margin: 0,
        }]);
        assert_eq!(r.resolve(TileId(3)), None);
        assert_eq!(r.resolve(TileId(13)).map(|t| t.local_id), Some(3));
    }
}

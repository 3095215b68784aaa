// tests/load_tests.rs

use std::fs;
use std::path::Path;
use tile_rpg::{GameConfig, Map, MapError, TileId, TileSource, World};

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).expect("failed to write fixture");
}

const SPAWN: &str = r#"
{
    "tilewidth": 16,
    "tileheight": 16,
    "layers": [
        { "name": "floor", "width": 4, "height": 3,
          "data": [1,1,1,1, 1,2,2,1, 1,1,1,1] },
        { "name": "collision", "width": 4, "height": 3, "visible": false,
          "data": [0,0,0,0, 0,0,23,0, 0,0,0,0] },
        { "name": "trees", "width": 4, "height": 3,
          "data": [0,0,0,0, 0,0,0,0, 261,0,0,0] }
    ],
    "tilesets": [
        { "firstgid": 1, "source": "TilesetFloor.json" },
        { "firstgid": 261, "source": "TilesetNature.json" }
    ]
}
"#;

const FLOOR: &str = r#"
{ "image": "TilesetFloor.png", "columns": 22, "tilecount": 260,
  "tilewidth": 16, "tileheight": 16, "dummyField": "ignored" }
"#;

const NATURE: &str = r#"
{ "tiles": [ { "id": 0, "image": "../images/tree.png", "imagewidth": 32, "imageheight": 48 } ] }
"#;

fn spawn_map() -> (tempfile::TempDir, Map) {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "spawn.json", SPAWN);
    write(dir.path(), "TilesetFloor.json", FLOOR);
    write(dir.path(), "TilesetNature.json", NATURE);
    let map = Map::load(dir.path().join("spawn.json")).expect("spawn map should load");
    (dir, map)
}

#[test]
fn integration_load_map_with_both_tileset_kinds() {
    let (dir, map) = spawn_map();

    assert_eq!(map.layers.len(), 3);
    assert_eq!(map.pixel_width(), 64.0);
    assert_eq!(map.pixel_height(), 48.0);
    assert_eq!(map.base_dir, dir.path());

    let floor = map.resolve(TileId(2)).expect("floor tile");
    assert_eq!(floor.tileset, 0);
    assert!(matches!(floor.source, TileSource::Atlas { .. }));

    let tree = map.resolve(TileId(261)).expect("tree tile");
    assert_eq!(tree.tileset, 1);
    assert!(matches!(tree.source, TileSource::Image { image: 0, .. }));

    let images: Vec<String> = map
        .resolver
        .tilesets()
        .iter()
        .map(|t| match t {
            tile_rpg::IrTileset::Atlas { image, .. } => image.clone(),
            tile_rpg::IrTileset::Collection { tiles, .. } => tiles[0].image.clone(),
        })
        .collect();
    assert!(images[0].starts_with(&*dir.path().to_string_lossy()));
    assert!(images[1].ends_with("tree.png"));
}

#[test]
fn collision_layer_blocks_movement() {
    let (_dir, map) = spawn_map();
    let mut cfg = GameConfig {
        colliders: vec![],
        enemies: vec![],
        ..Default::default()
    };
    cfg.player.x = 0.0;
    cfg.player.y = 16.0;

    let mut world = World::new(&cfg, &map);
    assert_eq!(world.colliders.len(), 1);

    let right = tile_rpg::InputSnapshot {
        right: true,
        ..Default::default()
    };
    for _ in 0..30 {
        world.step(&right, 0.016);
    }
    // the solid tile sits at column 2
    assert_eq!(world.player.body.pos.x, 16.0);
}

#[test]
fn integration_missing_map_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Map::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
}

#[test]
fn integration_unsupported_format() {
    let err = Map::load("foo.tmx").unwrap_err();
    match err {
        MapError::InvalidMap(msg) => assert!(msg.contains("foo.tmx")),
        other => panic!("expected InvalidMap, got {:?}", other),
    }
}

#[test]
fn missing_tileset_field_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "map.json",
        r#"{ "layers": [ { "name": "L", "width": 1, "height": 1, "data": [1] } ],
             "tilesets": [ { "source": "floor.json" } ] }"#,
    );
    let err = Map::load(dir.path().join("map.json")).unwrap_err();
    match err {
        MapError::Json { path, .. } => assert!(path.ends_with("map.json")),
        other => panic!("expected Json error, got {:?}", other),
    }
}

use anyhow::Context;
use macroquad::prelude::*;
use std::path::PathBuf;
use tile_rpg::render::{self, Assets};
use tile_rpg::{GameConfig, InputSnapshot, Map, World};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn config_path() -> Option<PathBuf> {
    std::env::args_os().nth(1).map(PathBuf::from)
}

fn window_conf() -> Conf {
    // Window settings are read before the event loop starts; a broken config
    // is reported again, fatally, once logging is up.
    let window = GameConfig::resolve(config_path())
        .map(|c| c.window)
        .unwrap_or_default();
    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        window_resizable: true,
        ..Default::default()
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = GameConfig::resolve(config_path()).context("Loading game config")?;
    let map = Map::load(&cfg.map).with_context(|| format!("Loading map {}", cfg.map))?;
    let assets = Assets::load(&cfg, &map).await?;
    let mut world = World::new(&cfg, &map);
    let view = render::view_camera(world.viewport);

    loop {
        let input = InputSnapshot::poll(&view);
        world.step(&input, get_frame_time());
        render::draw_world(&world, &map, &assets, &cfg);
        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

//! prism viewer: pans a camera over three outlined triangles.
//!
//! WASD or the arrow keys move the camera; Escape or closing the window quits.

mod config;
mod demo;
mod host;
mod keys;
mod surface;

use anyhow::Context;
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::Runtime;
use prism_scene::SceneGame;

use crate::config::ViewerConfig;
use crate::host::GameHost;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run(ViewerConfig::default()) {
        log::error!("prism: {err:#}");
        std::process::exit(1);
    }
}

fn run(config: ViewerConfig) -> anyhow::Result<()> {
    log::info!(
        "starting \"{}\" at {}x{} (scale {})",
        config.title,
        config.width,
        config.height,
        config.scale
    );

    let scene = demo::default_scene().context("failed to build the startup scene")?;
    log::debug!("scene holds {} triangles", scene.len());

    let game = SceneGame::with_renderer(scene, config.frame_renderer());
    Runtime::run(config.runtime_config(), GpuInit::default(), GameHost::new(game))
}

use anyhow::Result;
use clap::Parser;
use log::info;

use orbit_scene::cli::Cli;
use orbit_scene::core::{FixedStepScheduler, HeadlessEngine, SceneController};
use orbit_scene::loaders::{AssetManifest, SceneReady};
use orbit_scene::scenes::showcase_scene;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let desc = showcase_scene();

    // Preload assets before the scene may be staged
    let ready = match &cli.typeface {
        Some(path) => pollster::block_on(
            AssetManifest::new().typeface(&desc.text.font, path).load(),
        )?,
        None => SceneReady::with_fallback_font(&desc.text.font),
    };

    let mut controller = SceneController::build(HeadlessEngine::new(), &ready, &desc)?;
    info!(
        "staged {} shapes; driving {} frames at {} Hz",
        controller.object_count(),
        cli.frames,
        cli.fps
    );

    let mut scheduler = FixedStepScheduler::new(cli.fps).with_frame_cap(cli.frames);
    controller.run(&mut scheduler)?;

    let engine = controller.engine();
    println!(
        "rendered {} frames of {} meshes",
        engine.frames_rendered(),
        engine.mesh_count()
    );

    Ok(())
}

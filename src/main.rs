use anyhow::{bail, Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use log::info;
use sky_shooter::{
    init_logging, AssetManifest, PresentationPlugin, ShooterPlugin, SCREEN_HEIGHT, SCREEN_WIDTH,
    WINDOW_TITLE,
};

/// A small top-down arcade shooter
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let manifest = AssetManifest::discover();
    let extents = manifest
        .load_extents()
        .with_context(|| format!("loading sprites from {}", manifest.root().display()))?;
    info!(
        "sprites: player {} enemy {} cloud {}",
        extents.player, extents.enemy, extents.cloud
    );

    let window = Window {
        title: WINDOW_TITLE.to_owned(),
        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        resizable: false,
        ..default()
    };

    let exit = App::new()
        .insert_resource(extents)
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                }),
        )
        .add_plugins((ShooterPlugin, PresentationPlugin))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with code {code}"),
    }
}

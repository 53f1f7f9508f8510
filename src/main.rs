use std::path::PathBuf;

use clap::{ArgAction, Parser};
use freedraw::Config;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FREEDRAW_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "freedraw")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand drawing canvas with a pen/eraser tool panel"
)]
struct Cli {
    /// Load this config file instead of ~/.config/freedraw/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show a crosshair cursor over the canvas (same as `draggable = false`)
    #[arg(long, action = ArgAction::SetTrue)]
    crosshair: bool,

    /// Write the example config to ~/.config/freedraw/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["config", "crosshair"])]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.crosshair {
        config.canvas.draggable = false;
    }

    log::info!("Starting freedraw...");
    log::info!("  - Draw: drag on the canvas");
    log::info!("  - Pen / Eraser: switch tools (the other tool's sliders lock)");
    log::info!("  - Undo / Redo / Clear: canvas history");

    freedraw::app::run(config).map_err(|err| anyhow::anyhow!("Window failed: {err}"))?;

    log::info!("freedraw closed.");
    Ok(())
}

use anyhow::Context;
use clap::{ArgAction, Parser};
use inkboard::config::{Config, MAX_BOARD_EDGE};
use inkboard::export::{self, FileSaveConfig};
use inkboard::script;
use inkboard::{Whiteboard, WhiteboardOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKBOARD_GIT_HASH"), ")"),
    about = "Freehand whiteboard that replays pointer event scripts into PNG snapshots"
)]
struct Cli {
    /// JSON event script to replay (press/move/release/click and brush updates)
    #[arg(long, short = 'e', value_name = "FILE")]
    events: Option<PathBuf>,

    /// Write the PNG snapshot to this file instead of the export directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the snapshot as a data:image/png;base64 URI instead of writing a file
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "output")]
    data_url: bool,

    /// Board width in pixels (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=MAX_BOARD_EDGE as i64))]
    width: Option<i32>,

    /// Board height in pixels (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=MAX_BOARD_EDGE as i64))]
    height: Option<i32>,

    /// Config file to use instead of ~/.config/inkboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(events_path) = cli.events.as_deref() else {
        // No script: show usage
        println!("inkboard: Freehand whiteboard with PNG snapshots");
        println!();
        println!("Usage:");
        println!("  inkboard --events strokes.json --output board.png");
        println!("  inkboard --events strokes.json --data-url");
        println!("  inkboard --events strokes.json            Save to the export directory");
        println!("  inkboard --help                           Show help");
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut options = WhiteboardOptions::from_config(&config);
    if let Some(width) = cli.width {
        options.width = width;
    }
    if let Some(height) = cli.height {
        options.height = height;
    }

    let events = script::load_script(events_path)?;
    let mut board = Whiteboard::new(options).context("Failed to create drawing surfaces")?;
    let summary = script::replay(&mut board, &events, &config.toolbar);
    log::info!(
        "Replayed {} pointer events ({} brush updates, {} rejected)",
        summary.pointer_events,
        summary.brush_updates,
        summary.rejected_updates
    );

    if board.state().is_active() {
        log::warn!("Script ended mid-stroke; uncommitted ink is not part of the snapshot");
    }

    if cli.data_url {
        println!("{}", board.export_data_url()?);
    } else if let Some(output) = cli.output.as_deref() {
        let png = board.export_snapshot()?;
        export::write_snapshot(&png, output)
            .with_context(|| format!("Failed to write snapshot to {}", output.display()))?;
        log::info!("Board snapshot written to {}", output.display());
    } else {
        let save_config = FileSaveConfig::from_config(&config.export);
        let path = board
            .save_snapshot(&save_config)
            .context("Failed to save board snapshot")?;
        println!("{}", path.display());
    }

    Ok(())
}

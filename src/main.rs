use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use blockfall::Game;

mod app;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about)]
struct Args {
    /// Seed for the piece sequence; random when omitted.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    let game = match args.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    app::run(game)
}

// The terminal belongs to the UI, so logs only go to a file.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

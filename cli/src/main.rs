mod tui;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todotab")]
#[command(about = "An in-memory task table with filtering", long_about = None)]
struct Cli {
    /// Where to write the log. Defaults to ~/.todotab/todotab.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.log_file)?;

    tracing::info!("session started");
    let result = tui::run();
    tracing::info!("session ended");
    result
}

/// Logs go to a file because the terminal itself belongs to the UI.
/// RUST_LOG overrides the default INFO level.
fn install_tracing(log_file: Option<PathBuf>) -> Result<()> {
    let path = match log_file {
        Some(path) => path,
        None => {
            let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
            let dir = home.join(".todotab");
            fs::create_dir_all(&dir)?;
            dir.join("todotab.log")
        }
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

mod cli;
mod commands;
mod error;
mod matcher;
mod query;
mod record;
mod scanner;
mod session;
mod table;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use session::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "todo_table=debug"
    } else {
        "todo_table=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("Invalid scan path: {}", cli.path.display()))?;

    let result = scanner::scan_directory(&root, &cli.scan_options())
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    info!(
        records = result.records.len(),
        files_scanned = result.files_scanned,
        files_skipped = result.files_skipped,
        "scan finished"
    );

    let mut session = Session::new(result.records);
    session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Failed to read commands")?;

    Ok(())
}

//! `hookhub-tui`: terminal browser for the HookHub catalog.
//!
//! Built on [ratatui](https://ratatui.rs). The catalog is loaded once,
//! before the terminal is taken over, and shown as a grid of hook cards
//! under a category bar. Selecting a category re-derives the grid; `Enter`
//! hands the selected hook's repository URL to the platform opener.
//!
//! Logs are written to a file (default `/tmp/hookhub-tui.log`, or
//! `tui.log_file` in the config) to avoid corrupting the terminal UI.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use hookhub_core::Catalog;

use crate::app::App;

/// Browse open-source Claude Code hooks by category.
#[derive(Parser, Debug)]
#[command(name = "hookhub-tui", version, about)]
struct Cli {
    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long, env = "HOOKHUB_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log file path (defaults to `tui.log_file` from the config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. Nothing may log to stdout/stderr while the
/// TUI owns the terminal. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(log_file: &Path, verbose: u8) -> WorkerGuard {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("hookhub_tui={log_level},hookhub_core={log_level}"))
    });

    let log_dir = log_file.parent().unwrap_or(Path::new("/tmp"));
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("hookhub-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    let cfg = hookhub_config::load_config()?;
    let log_file = cli.log_file.clone().unwrap_or_else(|| cfg.tui.log_file.clone());

    // Tracing to file; hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&log_file, cli.verbose);

    // Load failures surface here, before the first frame is drawn
    let path = hookhub_config::resolve_catalog_path(cli.catalog.as_deref(), &cfg);
    let catalog = Catalog::open(path.as_deref())?;

    info!(source = %catalog.source(), hooks = catalog.len(), "starting hookhub-tui");

    let mut app = App::new(&catalog);
    app.run().await?;

    Ok(())
}

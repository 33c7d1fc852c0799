//! `alfamind` — Terminal storefront for the Alfamind virtual store.
//!
//! Built on [ratatui](https://ratatui.rs) around the watch-channel screen
//! router from `alfamind-core`. Boots into a splash screen, moves to
//! Login when the router's one-shot timer fires, and lands on the Home
//! storefront after a login or signup is accepted.
//!
//! Logs are written to a file (default `/tmp/alfamind.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod transition;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use alfamind_config::Config;
use alfamind_core::{ScreenRouter, StubAuth};

use crate::app::{App, AppSettings};

/// Terminal storefront for the Alfamind virtual store.
#[derive(Parser, Debug)]
#[command(name = "alfamind", version, about)]
struct Cli {
    /// Log file path (defaults to /tmp/alfamind.log)
    #[arg(long, default_value = "/tmp/alfamind.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Splash screen duration in milliseconds (overrides the config file)
    #[arg(long)]
    splash_ms: Option<u64>,

    /// Disable the crossfade between screens
    #[arg(long)]
    reduce_motion: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("alfamind={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("alfamind.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Resolve the effective settings. Priority: CLI flags > config file > defaults.
fn resolve_settings(cli: &Cli, config: &Config) -> AppSettings {
    let splash_duration = cli.splash_ms.map_or_else(
        || alfamind_config::splash_duration(config),
        Duration::from_millis,
    );

    AppSettings {
        splash_duration,
        reduce_motion: cli.reduce_motion || config.ui.reduce_motion,
        profile: alfamind_config::store_profile(config),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    if cli.splash_ms == Some(0) {
        return Err(eyre!("--splash-ms must be at least 1"));
    }

    if cli.init_config {
        let path = alfamind_config::config_path();
        alfamind_config::save_config(&Config::default())?;
        println!("Konfigurasi default ditulis ke {}", path.display());
        return Ok(());
    }

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config = match alfamind_config::load_config() {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "config unreadable, falling back to defaults");
            Config::default()
        }
    };
    let settings = resolve_settings(&cli, &config);

    info!(
        store = %settings.profile.store_name,
        splash_ms = settings.splash_duration.as_millis(),
        reduce_motion = settings.reduce_motion,
        "starting alfamind"
    );

    let router = ScreenRouter::new();
    let auth: Arc<dyn alfamind_core::AuthGateway> = Arc::new(StubAuth);
    let mut app = App::new(router, auth, settings);
    app.run().await?;

    Ok(())
}

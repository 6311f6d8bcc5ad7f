mod actions;
mod app;
mod clipboard;
mod config;
mod probe;
mod render;
mod startup;
mod state;
mod toast;
mod types;
mod ui;

use crate::app::App;
use crate::config::Config;
use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send GET requests to an HTTP API and read the JSON that comes back
#[derive(Parser, Debug)]
#[command(name = "api-probe", version, about, long_about = None)]
struct Cli {
    /// Origin to resolve endpoints against, e.g. http://localhost:5000
    #[arg(short, long, env = "API_PROBE_ORIGIN")]
    origin: Option<String>,

    /// Save --origin to the config file
    #[arg(long, requires = "origin")]
    save: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli.log_level)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting api-probe");

    let config = load_config(&cli)?;

    let app = App::new(config)?;
    let terminal = ratatui::init();
    // Pastes arrive as one event instead of a burst of key presses
    if let Err(e) = execute!(io::stdout(), EnableBracketedPaste) {
        tracing::warn!("bracketed paste unavailable: {e}");
    }

    let app_result = app.run(terminal).await;

    let _ = execute!(io::stdout(), DisableBracketedPaste);
    ratatui::restore();
    app_result
}

/// Log to a daily file so nothing is written over the TUI
fn init_logging(level: &str) -> Result<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = RollingFileAppender::new(Rotation::DAILY, Config::log_dir()?, "api-probe.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(guard)
}

/// Load configuration with CLI overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(origin) = &cli.origin {
        if cli.save {
            config.set_origin(origin)?;
        } else {
            config.server.origin = Some(crate::config::validate_origin(origin)?);
        }
        tracing::info!(origin = ?config.server.origin, saved = cli.save, "origin from command line");
    }

    Ok(config)
}

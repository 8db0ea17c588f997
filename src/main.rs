//! UptimeRobot TUI
//!
//! Interactive terminal dashboard for UptimeRobot monitors. Fetches the full
//! monitor list through the paginated `getMonitors` API and keeps it in a
//! short-lived in-memory cache between refreshes.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use upwatch::config::Config;
use upwatch::viewer::App;

#[derive(Parser, Debug)]
#[command(name = "upwatch")]
#[command(about = "Terminal UI for UptimeRobot monitors", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// UptimeRobot API key (overrides config file)
    #[arg(short = 'k', long, value_name = "KEY")]
    api_key: Option<String>,

    /// Start with all monitors visible, not just problems
    #[arg(short = 'a', long)]
    show_all: bool,

    /// Skip the cache and fetch fresh data on startup
    #[arg(short, long)]
    force_refresh: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Redirect logs to a file so they do not corrupt the TUI
    let log_path = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("upwatch")
        .join("upwatch.log");

    // Create directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);

    match log_file {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .with_writer(file)
                .init();
        }
        Err(_) => {
            // Without a log file, keep stderr quiet except for errors
            tracing_subscriber::fmt()
                .with_target(false)
                .with_level(true)
                .with_max_level(tracing::Level::ERROR)
                .init();
        }
    }

    let args = Args::parse();

    // Load configuration
    let config = Config::load(args.config.as_deref())?;

    // Override with CLI args if provided
    let config = Config {
        api_key: args.api_key.or(config.api_key),
        show_all: args.show_all || config.show_all,
        force_refresh: args.force_refresh || config.force_refresh,
        ..config
    };

    // Create and run the app
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}

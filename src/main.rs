//! HackPortal Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from a TOML file (see `hackportal config`) with
//! `HACKPORTAL_*` environment overrides. `RUST_LOG` takes precedence over
//! the configured log level.

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use hackportal::config::{generate_default_config, Config, LoggingConfig};
use hackportal::server::{serve, AppState};
use hackportal_core::{Announcement, PushPayload};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "hackportal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hackathon portal pages with live announcements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the portal server
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Publish an announcement to live dashboards
    Announce {
        /// Announcement text
        text: String,
        /// Portal server URL
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            let config = match config {
                Some(path) => Config::load_with_env(&path)?,
                None => Config::load_default(),
            };
            init_tracing(&config.logging);

            tracing::info!("Starting HackPortal v{}", env!("CARGO_PKG_VERSION"));
            match &config.upstream.base_url {
                Some(url) => tracing::info!("Portal API: {}", url),
                None => tracing::info!("Portal API: same host as each page request"),
            }
            tracing::info!("Browser bundle: {}", config.server.assets_dir);

            let state = AppState::new(config).context("Failed to build portal API client")?;
            serve(state).await?;
        }

        Commands::Announce { text, url } => {
            let payload = PushPayload::from_announcement(&Announcement::new(text, Utc::now()))?;
            let endpoint = format!("{}/push/announcements", url.trim_end_matches('/'));

            let response = reqwest::Client::new()
                .post(&endpoint)
                .json(&payload)
                .send()
                .await
                .with_context(|| format!("Failed to reach {}", endpoint))?;

            let status = response.status();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            if status.is_success() {
                println!("Delivered to {} dashboard(s)", body["delivered"]);
            } else {
                anyhow::bail!(
                    "Server rejected announcement ({}): {}",
                    status,
                    body["error"]["message"]
                );
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Install the global subscriber
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("hackportal={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

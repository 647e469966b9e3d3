//! Interactive GPS coordinate collector.
//!
//! Run it with
//! ```not_rust
//! cargo run
//! ```
//! and enter latitude/longitude pairs; type `exit` at the latitude prompt to stop.
//! Diagnostics go to stderr and are controlled by `RUST_LOG` or `--log-level`.

mod config;
mod handlers;
mod models;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CollectorConfig;
use crate::handlers::event_actor::CollectorActor;

#[derive(Parser, Debug)]
#[command(name = "gps_collector", version, about = "Collect latitude/longitude pairs from the terminal")]
struct Cli {
    #[arg(long, help = "Print the collected coordinates as JSON on exit")]
    json: bool,
    #[arg(long, default_value = "warn", help = "Log filter used when RUST_LOG is unset")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CollectorConfig {
        export_json: cli.json,
        ..CollectorConfig::default()
    };

    let actor = CollectorActor::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), config);
    let log = actor
        .run_actor()
        .await
        .context("coordinate collector stopped")?;

    info!("Collected {} coordinates", log.len());
    Ok(())
}

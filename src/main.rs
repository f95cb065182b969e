//! # life-baseline
//!
//! Terminal front end for the life reference tracker.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive wizard
//! life-baseline
//!
//! # Report from a profile file, saved as Markdown
//! life-baseline report --profile me.yaml --save
//!
//! # Status codes of a dimension
//! life-baseline options --dimension career
//! ```
//!
//! Logs go to stderr; `LIFE_BASELINE_LOG_FORMAT=json` switches to JSON lines
//! and `RUST_LOG` overrides the filter.

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let log_format =
        std::env::var("LIFE_BASELINE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "life_baseline=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if let Err(e) = cli::execute(cli).await {
        tracing::error!(error = %e, "command failed");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

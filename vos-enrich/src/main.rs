//! vos-enrich - adds cluster labels and item descriptions to a VOSviewer network
//!
//! Exits non-zero with the error chain on stderr if any input is missing or
//! malformed, or the output cannot be written.

use anyhow::{Context, Result};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vos_enrich::cli::Args;
use vos_enrich::config::LoggingConfig;
use vos_enrich::{enrich, Settings};

fn main() -> Result<()> {
    let args = Args::parse_normalized(std::env::args_os());

    let settings = Settings::load(args.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(&settings.logging)?;

    info!(
        "Starting vos-enrich v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let paths = args.paths();
    let summary = enrich(&paths, &settings).with_context(|| {
        format!(
            "Failed to enrich {} into {}",
            paths.input_network.display(),
            paths.output_network.display()
        )
    })?;

    info!(
        "✓ Wrote {} ({} clusters, {} of {} items described, {} item records)",
        paths.output_network.display(),
        summary.clusters,
        summary.items_described,
        summary.items_total,
        summary.item_records
    );

    Ok(())
}

/// Initialize tracing: RUST_LOG wins over the configured level
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level {:?}", logging.level))?;

    match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

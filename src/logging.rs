//! Diagnostic logging
//!
//! The terminal is owned by the UI, so logs go to a file instead of stdout.
//! `SURVEY_TUI_LOG` overrides the configured filter.

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "SURVEY_TUI_LOG";

pub fn initialize(config: &Config) -> Result<()> {
    let log_path = config
        .log_path()
        .ok_or_else(|| anyhow!("Could not determine log file path"))?;

    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Cannot open log file {}", log_path.display()))?;

    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| config.log_level.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&filter).with_context(|| format!("Invalid log filter '{}'", filter))?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;

    tracing::info!(path = %log_path.display(), "logging initialized");
    Ok(())
}

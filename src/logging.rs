//! File logging
//!
//! The terminal belongs to the UI, so events are written to a log file.

use crate::config::LogConfig;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "API_TESTER_LOG";

const QUIET_TARGETS: [&str; 5] = ["reqwest", "hyper", "hyper_util", "rustls", "arboard"];

pub fn log_file_path(config: &LogConfig) -> PathBuf {
    config
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("api-tester.log"))
}

/// `API_TESTER_LOG` when set, `info` otherwise; dependency chatter capped at warn
pub fn build_filter() -> Result<EnvFilter> {
    let mut filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

pub fn init_tracing_subscriber(config: &LogConfig) -> Result<PathBuf> {
    let path = log_file_path(config);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter()?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install log subscriber: {e}"))?;

    Ok(path)
}

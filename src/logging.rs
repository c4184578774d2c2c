//! Logging setup for the binary
//!
//! Two layers on one registry: the console (stderr) honours `--log-level`
//! or `TERRAFORM_INSTALL_LOG`, and `<dir>/.terraform_install.log` receives
//! every event.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LogLevel;

/// Environment variable holding a console filter directive
pub const LOG_ENV: &str = "TERRAFORM_INSTALL_LOG";

/// Log file written inside the install directory
pub const LOG_FILE_NAME: &str = ".terraform_install.log";

/// Console level from the command line flag and the config file.
///
/// The flag wins. An unparseable flag falls back to `info`; the rejected
/// value is returned so it can be reported once logging is up.
pub fn resolve_level(flag: Option<&str>, configured: LogLevel) -> (LogLevel, Option<String>) {
    match flag {
        None => (configured, None),
        Some(raw) => match LogLevel::parse(raw) {
            Some(level) => (level, None),
            None => (LogLevel::Info, Some(raw.to_string())),
        },
    }
}

/// Install the global subscriber
pub fn init(dir: &Path, level: LogLevel) -> anyhow::Result<()> {
    let console_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create install directory {}", dir.display()))?;
    let log_path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_filter(LevelFilter::TRACE);

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

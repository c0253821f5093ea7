// Logging setup for the capture player
// stdout belongs to the game server, so logs go to stderr or a file

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

use crate::config::LoggingConfig;

/// Parse a level name, falling back to WARN for anything unknown
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::WARN)
}

/// Initialize logging
///
/// # Arguments
/// * `cfg` - Logging section of the config (level and optional file)
/// * `debug` - Force DEBUG level (controlled by --debug flag)
///
/// # Behavior
/// - No file configured: human readable lines on stderr
/// - File configured: appends to it, without color codes
pub fn init(cfg: &LoggingConfig, debug: bool) -> Result<()> {
    let level = if debug {
        Level::DEBUG
    } else {
        parse_level(&cfg.level)
    };

    let builder = tracing_subscriber::fmt().with_max_level(level);
    match &cfg.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

// Configuration file loading and creation

use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the per-user configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("capture-bumpers");
    path.push("config.toml");
    path
}

/// Load configuration
///
/// An explicit path must exist and parse. Without one, the per-user file is
/// used if present; a broken per-user file falls back to defaults so a
/// stray edit never costs a match. Nothing is written here.
///
/// The second value carries the parse error when defaults were substituted.
/// Logging is not set up yet when this runs, so the caller reports it.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<anyhow::Error>)> {
    match explicit {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            let config = parse_config(&contents)
                .with_context(|| format!("parsing config file {}", path.display()))?;
            Ok((config, None))
        }
        None => load_user_config(&get_config_path()),
    }
}

/// Load the per-user file at `path`, falling back to defaults when it is
/// missing or does not parse
fn load_user_config(path: &Path) -> Result<(Config, Option<anyhow::Error>)> {
    if !path.exists() {
        return Ok((Config::default(), None));
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    match parse_config(&contents) {
        Ok(config) => Ok((config, None)),
        Err(e) => {
            let e = e.context(format!("parsing config file {}", path.display()));
            Ok((Config::default(), Some(e)))
        }
    }
}

fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("serializing default config")?;

    // Add helpful header comments
    let commented_toml = format!(
        "# Capture bumper player configuration\n\
         # Pass with --config, or place at {}\n\
         #\n\
         # Bumper bots: \"sweeper\", \"shepherd\"\n\
         # Sled paths: \"marching\", \"figure_eight\"\n\
         # Distances are game units on the 800x800 field\n\n\
         {}",
        get_config_path().display(),
        toml_string
    );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating config directory {}", parent.display()))?;
    }
    fs::write(path, commented_toml)
        .with_context(|| format!("writing config file {}", path.display()))?;
    Ok(())
}

// Configuration module for the capture player
// Handles loading and managing tuning from a TOML file

pub mod loader;
pub mod types;

pub use loader::{create_default_config, get_config_path, load_config};
pub use types::{
    BotChoice, Config, LoggingConfig, PatrolConfig, ShepherdConfig, SledChoice, SledConfig,
    TargetingConfig,
};

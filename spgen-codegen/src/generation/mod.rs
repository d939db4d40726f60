//! Scaffold files.

mod config_toml;

pub use config_toml::{CONFIG_TEMPLATE, ConfigToml, DEFAULT_CONFIG_FILE};

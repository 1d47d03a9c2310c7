//! Configuration file parsing for opmanual
//!
//! Supports `<config_dir>/opmanual/config.toml` or an explicit path given on
//! the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_default_settings, load_settings_from,
    CONFIG_FILENAME, DEFAULT_CONFIG_CONTENT,
};
pub use types::*;

//! Configuration module for encscore
//!
//! This module handles:
//! - Project-level configuration (encscore.toml / .encscorerc.json)
//! - User-level fallback (~/.config/encscore/config.toml)
//! - CLI defaults

mod project_config;

pub use project_config::{
    default_config_template, load_config_file, load_project_config, user_config_path, CliDefaults,
    ProjectConfig, CONFIG_FILE_NAME,
};

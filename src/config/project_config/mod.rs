//! Project-level configuration support
//!
//! Loads CLI defaults from `encscore.toml` or `.encscorerc.json` in the
//! working directory, falling back to `~/.config/encscore/config.toml`.
//!
//! # Configuration Format
//!
//! ```toml
//! # encscore.toml
//!
//! [defaults]
//! model = "zama-fhe"
//! load = 3000
//! pressure = 0.3
//! format = "text"
//! no_emoji = false
//! ```
//!
//! Scoring weights are not configurable; only the defaults that the
//! command line would otherwise supply live here.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Preferred config file name
pub const CONFIG_FILE_NAME: &str = "encscore.toml";
const JSON_CONFIG_FILE_NAME: &str = ".encscorerc.json";

/// Project configuration loaded from encscore.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Default values for CLI flags
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct CliDefaults {
    /// Default model identifier
    #[serde(default)]
    pub model: Option<String>,

    /// Default load (TPS)
    #[serde(default)]
    pub load: Option<f64>,

    /// Default network pressure
    #[serde(default)]
    pub pressure: Option<f64>,

    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Disable emoji in text output
    #[serde(default)]
    pub no_emoji: Option<bool>,
}

impl ProjectConfig {
    /// Layer another config over this one (other takes priority)
    pub fn merge(&mut self, other: ProjectConfig) {
        let d = other.defaults;
        if d.model.is_some() {
            self.defaults.model = d.model;
        }
        if d.load.is_some() {
            self.defaults.load = d.load;
        }
        if d.pressure.is_some() {
            self.defaults.pressure = d.pressure;
        }
        if d.format.is_some() {
            self.defaults.format = d.format;
        }
        if d.no_emoji.is_some() {
            self.defaults.no_emoji = d.no_emoji;
        }
    }
}

/// Get the user config file path (~/.config/encscore/config.toml)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("encscore").join("config.toml"))
}

/// Load configuration for a working directory.
///
/// The user config is applied first and the project file in `dir` wins
/// field by field. Unreadable or malformed files are logged and skipped.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let mut config = ProjectConfig::default();

    if let Some(user_path) = user_config_path().filter(|p| p.exists()) {
        match load_config_file(&user_path) {
            Ok(user) => {
                debug!("Loaded user config from {}", user_path.display());
                config.merge(user);
            }
            Err(e) => warn!("Failed to load {}: {:#}", user_path.display(), e),
        }
    }

    for name in [CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(project) => {
                debug!("Loaded project config from {}", path.display());
                config.merge(project);
                return config;
            }
            Err(e) => warn!("Failed to load {}: {:#}", path.display(), e),
        }
    }

    debug!("No project config found, using defaults");
    config
}

/// Load a single config file, picking the parser by extension
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?
    } else {
        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))?
    };
    Ok(config)
}

/// Commented starter config written by `encscore init`
pub fn default_config_template() -> String {
    format!(
        r#"# encscore configuration
#
# Defaults used when the matching command-line flag is not given.
# Flags and ENCSCORE_* environment variables take priority.

[defaults]
# Model preset: {models}
model = "{model}"

# Transaction load (TPS)
load = {load:.0}

# Network volatility factor (0-1)
pressure = {pressure}

# Output format: text, json
format = "text"

# Plain text output without emoji
no_emoji = false
"#,
        models = crate::catalog::ids().join(", "),
        model = crate::catalog::DEFAULT_MODEL,
        load = crate::models::ScoringParameters::DEFAULT_LOAD,
        pressure = crate::models::ScoringParameters::DEFAULT_PRESSURE,
    )
}

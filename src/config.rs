//! Configuration for the duck-tails CLI.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.ducktails/settings.toml`, discovered from
//!   the current directory upward)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `DUCK_TAILS_`:
//! - `DUCK_TAILS_DEBUG=true` sets `debug`
//! - `DUCK_TAILS_LOGGING_DEFAULT=info` sets `logging.default`

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Directory holding the settings file, looked up from cwd upward.
pub const CONFIG_DIR: &str = ".ducktails";

/// Environment variable prefix for overrides.
const ENV_PREFIX: &str = "DUCK_TAILS_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level when no per-module override applies
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, e.g. `cli = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from the discovered workspace file, the
    /// environment, and built-in defaults, in reverse precedence.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join("settings.toml"));

        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
            .extract()
            .map_err(Box::new)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
            .extract()
            .map_err(Box::new)
    }

    /// Save current configuration to file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let parent = path
            .parent()
            .with_context(|| format!("invalid settings path: {}", path.display()))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;

        let toml_string = toml::to_string_pretty(self).context("cannot serialize settings")?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("cannot write {}", path.display()))?;

        Ok(())
    }

    /// Create a default settings file in the current directory.
    pub fn init_config_file(force: bool) -> anyhow::Result<PathBuf> {
        let config_path = PathBuf::from(CONFIG_DIR).join("settings.toml");

        if !force && config_path.exists() {
            anyhow::bail!("Configuration file already exists. Use --force to overwrite");
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }

    /// Find the workspace settings file by looking for the config
    /// directory, searching from the current directory up to root.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.exists() && config_dir.is_dir() {
                return Some(config_dir.join("settings.toml"));
            }
        }

        None
    }
}

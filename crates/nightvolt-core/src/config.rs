//! Configuration management for the portal client.
//!
//! Loads configuration from `${NIGHTVOLT_HOME}/config.toml` with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// Embedded from `default_config.toml` at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for configuration and data files.
    //!
    //! `NIGHTVOLT_HOME` resolution order:
    //! 1. `NIGHTVOLT_HOME` environment variable (if set)
    //! 2. ~/.config/nightvolt (default)
    //! 3. ./.nightvolt when no home directory can be determined

    use std::path::PathBuf;

    /// Storage key of the persisted user record.
    pub const SESSION_KEY: &str = "nightvolt_user";

    /// Returns the NIGHTVOLT home directory.
    pub fn nightvolt_home() -> PathBuf {
        if let Ok(home) = std::env::var("NIGHTVOLT_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".nightvolt"),
            |h| h.join(".config").join("nightvolt"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        nightvolt_home().join("config.toml")
    }

    /// Returns the path of the persisted session record.
    pub fn session_path() -> PathBuf {
        nightvolt_home().join(format!("{SESSION_KEY}.json"))
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        nightvolt_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Authentication endpoint URL.
    pub auth_url: String,

    /// Lifetime of on-screen notifications in seconds.
    pub notification_secs: u64,

    /// Tracing filter applied when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    pub const DEFAULT_AUTH_URL: &str =
        "https://functions.poehali.dev/c2d4f2cf-04ca-415f-b05b-10f2e816ee3f";
    const DEFAULT_NOTIFICATION_SECS: u64 = 5;
    const DEFAULT_LOG_FILTER: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Lifetime of a notification before it expires.
    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_url: Self::DEFAULT_AUTH_URL.to_string(),
            notification_secs: Self::DEFAULT_NOTIFICATION_SECS,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

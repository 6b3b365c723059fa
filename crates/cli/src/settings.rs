//! Config file loading and layering
//!
//! Values are resolved as: command-line flag, then config file, then the
//! built-in defaults.

use anyhow::{Context, Result};
use retention::RetentionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of the TOML config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Timestamp format of backup names
    pub file_format: Option<String>,
    pub retention: RetentionConfig,
}

impl Settings {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config file")
    }
}

/// Retention counts given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOverrides {
    pub daily: Option<i64>,
    pub weekly: Option<i64>,
    pub monthly: Option<i64>,
    pub yearly: Option<i64>,
}

impl KeepOverrides {
    /// Apply the flags on top of `base`, rejecting negative counts
    pub fn apply(&self, base: RetentionConfig) -> retention::Result<RetentionConfig> {
        RetentionConfig::from_signed(
            self.daily.unwrap_or(i64::from(base.keep_daily)),
            self.weekly.unwrap_or(i64::from(base.keep_weekly)),
            self.monthly.unwrap_or(i64::from(base.keep_monthly)),
            self.yearly.unwrap_or(i64::from(base.keep_yearly)),
        )
    }
}

/// Default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prune-backups").join("config.toml"))
}

/// Load settings
///
/// An explicit path must exist. Without one, the default location is used
/// when present and built-in defaults otherwise.
pub async fn load(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if tokio::fs::try_exists(&path).await.unwrap_or(false) => path,
            _ => {
                tracing::debug!("No config file found, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Settings::parse(&text).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Example config file with the built-in defaults
pub fn example_config() -> String {
    let defaults = RetentionConfig::default();
    format!(
        r#"# prune-backups configuration
#
# Command-line flags override these values.

# Timestamp format of backup names (chrono strftime syntax)
# file_format = "backup-%Y-%m-%d.tar.gz"

[retention]
# Buckets per tier; 0 disables a tier
keep_daily = {}
keep_weekly = {}
keep_monthly = {}
keep_yearly = {}
"#,
        defaults.keep_daily, defaults.keep_weekly, defaults.keep_monthly, defaults.keep_yearly
    )
}

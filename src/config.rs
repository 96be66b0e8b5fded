//! Site configuration.
//!
//! Loaded from a single `config.toml` at the project root. All settings
//! are optional — a missing file means stock defaults — and config files
//! are sparse: override just the values you want.
//!
//! ```toml
//! [gallery]
//! route = "/gallery"               # URL prefix for image routes
//!
//! [stats]
//! pinned_rider = "Yves Van Grimberge"  # optional; pinned to rank 1
//! ```
//!
//! Unknown keys are rejected to catch typos early. Config errors are the
//! one fatal failure category in velopress: they are operator mistakes,
//! unlike content problems, which are warn-and-skip.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub gallery: GalleryConfig,
    pub stats: StatsConfig,
}

/// Gallery publishing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Site-absolute URL prefix for image routes in published artifacts.
    pub route: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            route: default_route(),
        }
    }
}

/// Rider statistics settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    /// Rider pinned to rank 1 on the leaderboard, by exact name.
    pub pinned_rider: Option<String>,
}

fn default_route() -> String {
    "/gallery".to_string()
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gallery.route.starts_with('/') {
            return Err(ConfigError::Validation(
                "gallery.route must start with '/'".into(),
            ));
        }
        if self.gallery.route.len() > 1 && self.gallery.route.ends_with('/') {
            return Err(ConfigError::Validation(
                "gallery.route must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from the given path.
///
/// A missing file yields the stock defaults. A present file is parsed
/// with unknown keys rejected, then validated.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# velopress configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Gallery publishing
# ---------------------------------------------------------------------------
[gallery]
# Site-absolute URL prefix for image routes in published artifacts.
# An image file climb.jpg in event 2024-spring-classic is published as
# "/gallery/2024-spring-classic/climb.jpg".
route = "/gallery"

# ---------------------------------------------------------------------------
# Rider statistics
# ---------------------------------------------------------------------------
[stats]
# Rider pinned to rank 1 on the leaderboard regardless of ride count,
# by exact name. Everyone else is ranked from 2. Omit for a plain
# leaderboard starting at rank 1.
# pinned_rider = "Yves Van Grimberge"
"##
}

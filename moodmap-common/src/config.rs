//! Configuration loading and config file resolution
//!
//! Every setting has a compiled default, so a missing config file is never
//! fatal. Command-line flags are applied on top by the service binary.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MOODMAP_CONFIG";

/// Port the original frontend talks to
pub const DEFAULT_PORT: u16 = 5001;

/// Top-level TOML configuration
///
/// Every field is optional in the file; absent fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Interface to bind the HTTP listener to
    pub bind_address: String,
    pub port: u16,
    /// Default tracing filter level when RUST_LOG is unset
    pub log_level: String,
    pub geocoding: GeocodingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            geocoding: GeocodingConfig::default(),
        }
    }
}

/// Outbound geocoding provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// When false, no outbound calls are made at all
    pub enabled: bool,
    /// Base URL of the Nominatim-compatible primary provider
    pub primary_url: String,
    /// Base URL of the Open-Meteo-compatible fallback provider
    pub fallback_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary_url: "https://nominatim.openstreetmap.org".to_string(),
            fallback_url: "https://geocoding-api.open-meteo.com".to_string(),
            timeout_secs: 10,
            user_agent: concat!("MoodMap/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TomlConfig {
    /// Reject values that would only fail later at bind or request time
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::Config("port must be non-zero".to_string()));
        }
        if self.bind_address.trim().is_empty() {
            return Err(Error::Config("bind_address must not be empty".to_string()));
        }
        if self.geocoding.enabled {
            if self.geocoding.timeout_secs == 0 {
                return Err(Error::Config(
                    "geocoding.timeout_secs must be non-zero".to_string(),
                ));
            }
            for (key, url) in [
                ("geocoding.primary_url", &self.geocoding.primary_url),
                ("geocoding.fallback_url", &self.geocoding.fallback_url),
            ] {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(Error::Config(format!(
                        "{} must be an http(s) URL, got '{}'",
                        key, url
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Config file resolution in priority order:
/// 1. Command-line argument (highest priority)
/// 2. `MOODMAP_CONFIG` environment variable
/// 3. `<user config dir>/moodmap/config.toml`, if it exists
/// 4. None (compiled defaults only)
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    default_config_path().filter(|path| path.exists())
}

/// Platform config location, e.g. `~/.config/moodmap/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("moodmap").join("config.toml"))
}

/// Parse a TOML config file
///
/// Values are not validated here. Command-line overrides are applied on top
/// first, so callers run `validate()` on the merged result.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load the config file if there is one, otherwise fall back to defaults
///
/// A path that does not exist only produces a warning. A file that exists
/// but does not parse is an error.
pub fn load_or_default(path: Option<&Path>) -> Result<TomlConfig> {
    match path {
        None => Ok(TomlConfig::default()),
        Some(path) if !path.exists() => {
            warn!(
                "Config file {} not found, using compiled defaults",
                path.display()
            );
            Ok(TomlConfig::default())
        }
        Some(path) => load_toml_config(path),
    }
}

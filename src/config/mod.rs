//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/nearstay/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Nearby-search settings
    #[serde(default)]
    pub nearby: NearbyConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding provider settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Catalog source settings
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Nearby-search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyConfig {
    /// Radius within which a listing counts as nearby, in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,

    /// Default output format for the resolve command
    #[serde(default = "default_format")]
    pub format: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Geocoding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL of the Nominatim-compatible provider
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoder_timeout")]
    pub timeout_secs: u64,
}

/// Catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file; empty means the builtin catalog
    #[serde(default)]
    pub path: String,
}

// Default value functions for serde
fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_string()
}
fn default_geocoder_timeout() -> u64 {
    DEFAULT_GEOCODER_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nearby: NearbyConfig::default(),
            server: ServerConfig::default(),
            geocoder: GeocoderConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
            format: default_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            timeout_secs: default_geocoder_timeout(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["nearby", "radius_km"] => Some(self.nearby.radius_km.to_string()),
            ["nearby", "format"] => Some(self.nearby.format.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["geocoder", "base_url"] => Some(self.geocoder.base_url.clone()),
            ["geocoder", "timeout_secs"] => Some(self.geocoder.timeout_secs.to_string()),

            ["catalog", "path"] => Some(self.catalog.path.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["nearby", "radius_km"] => {
                self.nearby.radius_km = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid radius value: {}", value)))?;
            }
            ["nearby", "format"] => {
                self.nearby.format = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["geocoder", "base_url"] => {
                self.geocoder.base_url = value.to_string();
            }
            ["geocoder", "timeout_secs"] => {
                self.geocoder.timeout_secs = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid timeout value: {}", value)))?;
            }

            ["catalog", "path"] => {
                self.catalog.path = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "nearby.radius_km",
            "nearby.format",
            "server.host",
            "server.port",
            "geocoder.base_url",
            "geocoder.timeout_secs",
            "catalog.path",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

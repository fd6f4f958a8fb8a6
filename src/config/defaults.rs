//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants;

/// Default nearby radius in kilometers
pub const DEFAULT_RADIUS_KM: f64 = constants::geo::NEARBY_RADIUS_KM;

/// Default output format for the resolve command
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7979;

/// Default geocoding provider base URL
pub const DEFAULT_GEOCODER_URL: &str = constants::api::NOMINATIM_URL;

/// Default geocoding request timeout in seconds
pub const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = constants::api::GEOCODE_TIMEOUT_SECS;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "nearstay";

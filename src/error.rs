//! Error types for nearstay

use thiserror::Error;

/// Main error type for nearstay operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("could not extract or find coordinates")]
    NoCoordinateFound,

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Plus code error: {0}")]
    PlusCode(String),

    #[error("Geocoding error: {0}")]
    Geocode(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for nearstay operations
pub type Result<T> = std::result::Result<T, Error>;

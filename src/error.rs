// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Why a single trip document did not make it into the record store.
/// None of these are fatal; the loader logs them and moves on.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{location}': {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error from '{location}': {status}")]
    Http { location: String, status: String },

    #[error("malformed HTTP response from '{location}'")]
    MalformedResponse { location: String },

    #[error("unsupported location '{0}' (plain http:// or a local directory)")]
    UnsupportedLocation(String),

    #[error("no trip-data block in '{location}'")]
    MissingBlock { location: String },

    #[error("invalid trip data in '{location}': {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

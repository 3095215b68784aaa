use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading a map or one of its tilesets.
#[derive(Debug, Error)]
pub enum MapError {
    /// File I/O error
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// JSON parse error, including missing or mis-typed fields
    #[error("failed to parse {path}: {source}")]
    Json {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
    /// Structurally valid JSON that does not describe a usable map
    #[error("invalid map: {0}")]
    InvalidMap(String),
    /// No tile layers were found in the map JSON
    #[error("no tile layers found in map JSON")]
    NoLayer,
    /// A layer's data length does not match width * height
    #[error("invalid size for layer '{layer}': expected {expected} tiles, found {actual}")]
    InvalidLayerSize {
        /// Layer name
        layer: String,
        /// width * height
        expected: usize,
        /// Length of the data array
        actual: usize,
    },
    /// Tileset document is neither an atlas nor an image collection
    #[error("invalid tileset {path}: {reason}")]
    InvalidTileset {
        /// Tileset file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },
}

/// Error raised while loading the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("I/O error reading config {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// JSON parse error
    #[error("failed to parse config {path}: {source}")]
    Json {
        /// Config file
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
    /// A value is out of its allowed range
    #[error("invalid config: {0}")]
    Invalid(String),
}

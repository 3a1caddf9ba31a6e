use std::path::PathBuf;

use thiserror::Error;

/// Configuration could not be loaded or is incomplete.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Missing required setting `{0}`")]
    MissingField(&'static str),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to read `{field}` from {}: {source}", .path.display())]
    ReadFile {
        field: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

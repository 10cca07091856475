//! Error types.
//!
//! None of these reach the gameplay collaborator: the engine logs and absorbs
//! them so that a failing disk or network never blocks play.

use std::io;

/// Invalid achievement definitions.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate achievement id: {0}")]
    DuplicateId(String),

    #[error("Achievement {id} has non-positive target {target}")]
    InvalidTarget { id: String, target: f64 },

    #[error("Achievement {0} has zero points")]
    InvalidPoints(String),
}

/// Local durable cache failures.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cache serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Remote store failures.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Remote store is not configured")]
    Offline,

    #[error("Remote returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response from remote: {0}")]
    Decode(String),
}

impl From<ureq::Error> for SyncError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => SyncError::Status {
                status,
                message: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => SyncError::Transport(transport.to_string()),
        }
    }
}

/// Configuration file problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

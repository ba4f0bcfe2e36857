//! Error types for configuration and theme loading.

use thiserror::Error;

/// Errors raised while loading themes or configuration.
///
/// Rendering never fails; only building its inputs can.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The theme defines no classes for the requested component.
    #[error("theme has no classes for component '{0}'")]
    UnknownComponent(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

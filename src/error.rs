//! Error types for theme loading and validation.

use std::path::PathBuf;

/// Errors produced while loading, validating or serializing a theme configuration.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A theme variable is not a hex or CSS named color.
    #[error("themeVariables.{field}: {value:?} is not a valid color")]
    InvalidColor { field: &'static str, value: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize theme configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

//! Error types for the shell core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the settings store, toggles and navigation
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("settings document not found at {}", path.display())]
    StoreMissing { path: PathBuf },

    #[error("settings document at {} is corrupt: {reason}", path.display())]
    StoreCorrupt { path: PathBuf, reason: String },

    #[error("settings I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown feature '{0}'")]
    FeatureUnknown(String),

    #[error("page '{0}' is already registered")]
    DuplicatePage(String),

    #[error("page '{0}' was never registered")]
    UnknownPage(String),

    #[error("menu entry '{0}' is already registered")]
    DuplicateMenuEntry(String),

    #[error("menu entry '{0}' was never registered")]
    UnknownMenuEntry(String),

    #[error("a card for feature '{0}' already exists")]
    DuplicateCard(String),
}

/// Result type for shell operations
pub type ShellResult<T> = Result<T, ShellError>;

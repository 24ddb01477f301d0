//! Theme error types
//!
//! None of these are fatal: a failing collaborator disables one control or
//! skips one write, it never takes the page down.

use thiserror::Error;

/// Errors raised by preference storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// The host offers no persistent storage
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Errors raised by the theme controller and its collaborators
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The document has no header to host the controls
    #[error("No header element to host theme controls")]
    MissingHost,

    /// A host collaborator (translations, storage, ...) is absent or failed
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    /// Writing a preference failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for preference storage
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;

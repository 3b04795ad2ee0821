//! Error types for launchdeck.
//!
//! Absent state (a missing directory, an unregistered label) is modeled as a
//! normal value elsewhere in the crate; these variants cover genuine
//! failures only.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launchdeck operations.
#[derive(Debug, Error)]
pub enum LaunchdeckError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Service manager errors
    #[error("Control plane error: {message}")]
    ControlPlane { message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for launchdeck operations.
pub type Result<T> = std::result::Result<T, LaunchdeckError>;

impl From<std::io::Error> for LaunchdeckError {
    fn from(err: std::io::Error) -> Self {
        LaunchdeckError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl LaunchdeckError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LaunchdeckError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a control-plane error from a message.
    pub fn control_plane(message: impl Into<String>) -> Self {
        LaunchdeckError::ControlPlane {
            message: message.into(),
        }
    }
}

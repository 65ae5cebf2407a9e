//! Unified error type for the podpath workspace.
//!
//! Every variant is rendered verbatim into the `message` field of a
//! `Failure` result, so the `Display` text is part of the driver's
//! observable output.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PodPathError {
    /// The options payload is not valid JSON or has the wrong shape.
    #[error("{source}")]
    Decode {
        /// Underlying deserialization error.
        #[from]
        source: serde_json::Error,
    },

    /// A required identity field was absent or empty.
    #[error("missing required option {field:?}")]
    MissingIdentity {
        /// Options key that was missing.
        field: &'static str,
    },

    /// An option value cannot be used to build the host path.
    #[error("invalid value for option {field:?}: {value:?}")]
    InvalidOption {
        /// Options key that was rejected.
        field: &'static str,
        /// Offending value.
        value: String,
    },

    /// An I/O operation failed.
    #[error("{op} {}: {source}", .path.display())]
    Io {
        /// Operation that failed (`lstat`, `mkdir`).
        op: &'static str,
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The bind mount syscall was rejected.
    #[error("mount {} on {}: {errno}", .host_path.display(), .target.display())]
    Mount {
        /// Host directory being mounted.
        host_path: PathBuf,
        /// Mount point.
        target: PathBuf,
        /// Kernel error description.
        errno: String,
    },

    /// The unmount syscall was rejected.
    #[error("unmount {}: {errno}", .target.display())]
    Unmount {
        /// Mount point.
        target: PathBuf,
        /// Kernel error description.
        errno: String,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// The operation is not available on this platform.
    #[error("unsupported: {message}")]
    Unsupported {
        /// Description of the unsupported operation.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PodPathError>;

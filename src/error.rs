//! Error types for build tool operations.
//!
//! This module defines the top-level error surface of the binary. Archive
//! bundling has its own richer error type in [`crate::bundler::error`];
//! everything else funnels through [`BuildToolsError`].

use thiserror::Error;

/// Result type alias for build tool operations
pub type Result<T> = std::result::Result<T, BuildToolsError>;

/// Main error type for all build tool operations
#[derive(Error, Debug)]
pub enum BuildToolsError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive bundling errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// ZIP archive reading errors (toolkit extraction)
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// HTTP client errors (toolkit download)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Downloaded file did not match its expected checksum
    #[error("hash mismatch of downloaded file: expected {expected}, got {actual}")]
    HashMismatch {
        /// Expected hash value
        expected: String,
        /// Actual hash value
        actual: String,
    },

    /// Child process failed
    #[error("failed to run command {command}: {reason}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Captured stderr or spawn error
        reason: String,
    },

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

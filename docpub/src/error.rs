//! Error types for the docpub library.
//!
//! This module provides the error hierarchy for configuration resolution
//! and pipeline execution, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::{CanonicalKey, Section};

/// Result type alias for operations that may fail with a docpub error.
///
/// # Examples
///
/// ```
/// use docpub::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(443)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the docpub library.
///
/// This enum encompasses every failure condition of the publishing
/// pipeline. Build and upload failures are distinguished from the rest
/// because they map to dedicated process exit codes.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file named on the command line does not exist
    /// or is not a regular file.
    #[error("configuration file doesn't exist or is not a file: {}", path.display())]
    ConfigFileNotFound {
        /// The path that was given.
        path: PathBuf,
    },

    /// The configuration file is not valid JSON.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A required configuration field is absent after merging.
    #[error("missing field '{field}' in '{section}' configuration")]
    MissingField {
        /// The section the field belongs to.
        section: Section,
        /// The field that is absent.
        field: CanonicalKey,
    },

    /// Configuration resolution already failed earlier in this process.
    ///
    /// Resolution runs at most once; the first access surfaces the real
    /// error and later accesses see this marker instead.
    #[error("configuration unavailable: initialization already failed")]
    ConfigUnavailable,

    /// The doc-tool configuration file could not be read or written.
    #[error("doc-tool configuration {}: {reason}", path.display())]
    ToolConfig {
        /// The doc-tool configuration path.
        path: PathBuf,
        /// The reason the file could not be used.
        reason: String,
    },

    /// The build stage produced no artifact.
    #[error("build failed: {reason}")]
    BuildFailed {
        /// The reason the build produced nothing.
        reason: String,
    },

    /// The upload stage was rejected by the hosting service.
    #[error("upload failed: {reason}")]
    UploadFailed {
        /// The reason the upload did not complete.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is the build stage's failure signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpub::Error;
    ///
    /// let err = Error::BuildFailed { reason: "no output".to_string() };
    /// assert!(err.is_build_failure());
    /// ```
    #[must_use]
    pub fn is_build_failure(&self) -> bool {
        matches!(self, Self::BuildFailed { .. })
    }

    /// Check if this error is the upload stage's failure signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpub::Error;
    ///
    /// let err = Error::UploadFailed { reason: "rejected".to_string() };
    /// assert!(err.is_upload_failure());
    /// ```
    #[must_use]
    pub fn is_upload_failure(&self) -> bool {
        matches!(self, Self::UploadFailed { .. })
    }
}

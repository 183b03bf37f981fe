//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use docpub::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Documentation build failure (wrapped).
    Build(LibError),

    /// Upload rejection or transport failure (wrapped).
    Upload(LibError),

    /// Any other library error (wrapped).
    Library(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Documentation build failed
    /// - 2: Documentation upload failed
    /// - 3: Anything else (configuration, I/O, internal faults)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Build(_) => 1,
            CliError::Upload(_) => 2,
            CliError::Library(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Build(e) | CliError::Upload(e) | CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Build(e) | CliError::Upload(e) | CliError::Library(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_build_failure() {
            CliError::Build(e)
        } else if e.is_upload_failure() {
            CliError::Upload(e)
        } else {
            CliError::Library(e)
        }
    }
}

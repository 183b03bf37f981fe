//! Library exports for docpub-cli.
//!
//! This module exports the CLI structure for use by integration tests and
//! documentation tooling.

pub mod cli;
pub mod error;
pub mod publish;

// Re-export CLI for consumers of the crate
pub use cli::Cli;

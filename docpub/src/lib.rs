#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # docpub
//!
//! A library for publishing Doxygen documentation to a HostMyDocs server.
//!
//! This library resolves layered configuration, rewrites project metadata
//! into the Doxygen configuration, drives a clean documentation build, and
//! uploads the packaged result.
//!
//! ## Core Types
//!
//! - [`ConfigContext`] and [`Config`](config::Config): layered, lazily
//!   resolved configuration
//! - [`Pipeline`]: the resolve, build, upload state machine
//! - [`DoxygenBuilder`] and [`HostMyDocsUploader`]: production collaborators
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use docpub::config::canonicalize;
//! use docpub::config::{CanonicalKey, HostKey, ProjectKey};
//!
//! // File keys are matched against a closed registry.
//! assert_eq!(canonicalize("address"), CanonicalKey::Host(HostKey::Address));
//! assert_eq!(canonicalize("language"), CanonicalKey::Project(ProjectKey::Language));
//! assert_eq!(canonicalize("no-such-key"), CanonicalKey::Undefined);
//! ```

pub mod config;
pub mod doctool;
pub mod error;
pub mod logging;
pub mod pipeline;

// Re-export key types at crate root for convenience
pub use config::{
    Config, ConfigContext, ConfigMerger, DocToolConfig, GeneralConfig, HostConfig, ProjectConfig,
};
pub use doctool::ToolConfigFile;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use pipeline::{
    BuildRequest, DocArtifact, DocBuilder, DocUploader, DoxygenBuilder, HostMyDocsUploader,
    Pipeline, PipelineState, Stage, UploadTarget,
};

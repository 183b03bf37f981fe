//! Configuration system for docpub.
//!
//! This module provides layered configuration with support for:
//! - JSON configuration files keyed by a closed key registry
//! - Command-line overrides supplied as a partial tree
//! - Presence validation of the fields a publishing run requires
//! - Lazy, resolve-once access via [`ConfigContext`]
//!
//! # Configuration Precedence
//!
//! Configuration is merged from two sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line overrides
//! 2. The JSON file named by the `config_file` override (when given)
//!
//! Every field is optional in both sources; unknown or mistyped keys in the
//! file are dropped rather than rejected. Presence of the fields required
//! for publishing is enforced only at resolution time.
//!
//! # Examples
//!
//! Resolving a configuration supplied entirely on the command line:
//!
//! ```
//! use docpub::config::{Config, ConfigContext, DocToolConfig, HostConfig, ProjectConfig};
//!
//! let overrides = Config {
//!     host: HostConfig {
//!         address: Some("docs.example.com".to_string()),
//!         login: Some("publisher".to_string()),
//!         password: Some("secret".to_string()),
//!         ..Default::default()
//!     },
//!     doc_tool: DocToolConfig {
//!         config_file_path: Some("docs/Doxyfile".into()),
//!         ..Default::default()
//!     },
//!     project: ProjectConfig {
//!         language: Some("cpp".to_string()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let context = ConfigContext::new(overrides);
//! assert!(context.full().is_ok());
//! ```
//!
//! Classifying raw file keys against the registry:
//!
//! ```
//! use docpub::config::{canonicalize, CanonicalKey, HostKey};
//!
//! assert_eq!(canonicalize("port"), CanonicalKey::Host(HostKey::Port));
//! assert_eq!(canonicalize("Port"), CanonicalKey::Undefined);
//! ```

pub mod context;
pub mod keys;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use context::ConfigContext;
pub use keys::{canonicalize, CanonicalKey, DocToolKey, GeneralKey, HostKey, ProjectKey, Section};
pub use loader::ConfigLoader;
pub use merger::ConfigMerger;
pub use schema::{Config, DocToolConfig, GeneralConfig, HostConfig, ProjectConfig};
pub use validator::ConfigValidator;

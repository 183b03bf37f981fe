//! Lazy configuration resolution.
//!
//! A [`ConfigContext`] owns the command-line override tree and resolves
//! the effective configuration on first access: load the file named by the
//! overrides (if any), merge the overrides on top, validate. The result is
//! cached for the life of the context. Resolution runs at most once; after
//! a failed attempt every later access reports
//! [`Error::ConfigUnavailable`](crate::error::Error::ConfigUnavailable)
//! instead of retrying.

use std::cell::{Cell, OnceCell};

use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, DocToolConfig, GeneralConfig, HostConfig, ProjectConfig};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Lazily resolved configuration store.
///
/// # Examples
///
/// ```
/// use docpub::config::{Config, ConfigContext, DocToolConfig, HostConfig, ProjectConfig};
///
/// let overrides = Config {
///     host: HostConfig {
///         address: Some("docs.example.com".to_string()),
///         login: Some("publisher".to_string()),
///         password: Some("secret".to_string()),
///         ..Default::default()
///     },
///     doc_tool: DocToolConfig {
///         config_file_path: Some("docs/Doxyfile".into()),
///         ..Default::default()
///     },
///     project: ProjectConfig {
///         language: Some("cpp".to_string()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// let context = ConfigContext::new(overrides);
/// let host = context.host().unwrap();
/// assert_eq!(host.address.as_deref(), Some("docs.example.com"));
/// ```
#[derive(Debug)]
pub struct ConfigContext {
    /// Command-line override tree, merged over the file on resolution.
    overrides: Config,
    /// Resolved tree, populated by the first successful [`full`](Self::full).
    resolved: OnceCell<Config>,
    /// Set when resolution has failed; later accesses must not retry.
    failed: Cell<bool>,
}

impl ConfigContext {
    /// Create a context over a command-line override tree.
    ///
    /// Nothing is loaded or validated until the first accessor call.
    #[must_use]
    pub fn new(overrides: Config) -> Self {
        Self {
            overrides,
            resolved: OnceCell::new(),
            failed: Cell::new(false),
        }
    }

    /// The fully resolved configuration, resolving it on first access.
    ///
    /// # Errors
    ///
    /// On the first access, returns whatever loading, parsing, or
    /// validation reported. On later accesses after a failure, returns
    /// [`Error::ConfigUnavailable`] without re-running resolution.
    pub fn full(&self) -> Result<&Config> {
        if let Some(config) = self.resolved.get() {
            return Ok(config);
        }
        if self.failed.get() {
            return Err(Error::ConfigUnavailable);
        }
        match self.resolve() {
            Ok(config) => Ok(self.resolved.get_or_init(|| config)),
            Err(error) => {
                self.failed.set(true);
                Err(error)
            }
        }
    }

    /// The `general` section of the resolved configuration.
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`full`](Self::full).
    pub fn general(&self) -> Result<&GeneralConfig> {
        Ok(&self.full()?.general)
    }

    /// The host section of the resolved configuration.
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`full`](Self::full).
    pub fn host(&self) -> Result<&HostConfig> {
        Ok(&self.full()?.host)
    }

    /// The doc-tool section of the resolved configuration.
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`full`](Self::full).
    pub fn doc_tool(&self) -> Result<&DocToolConfig> {
        Ok(&self.full()?.doc_tool)
    }

    /// The project section of the resolved configuration.
    ///
    /// # Errors
    ///
    /// Propagates the same errors as [`full`](Self::full).
    pub fn project(&self) -> Result<&ProjectConfig> {
        Ok(&self.full()?.project)
    }

    fn resolve(&self) -> Result<Config> {
        let base = match &self.overrides.general.config_file {
            Some(path) => ConfigLoader::load_file(path)?,
            None => Config::default(),
        };
        let merged = ConfigMerger::merge(base, &self.overrides);
        ConfigValidator::validate(&merged)?;
        log::debug!("configuration resolved");
        Ok(merged)
    }
}

//! Configuration merging and precedence handling.
//!
//! Exactly two sources exist: the file tree (base) and the CLI override
//! tree. Merging is recursive with leaf granularity: a `Some` leaf in the
//! source overwrites the corresponding target leaf, `None` preserves it,
//! and sections never replace each other wholesale. Merging never fails.

use crate::config::schema::{Config, DocToolConfig, GeneralConfig, HostConfig, ProjectConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use docpub::{Config, ConfigMerger, ProjectConfig};
///
/// let base = Config {
///     project: ProjectConfig {
///         version: Some("1.0".to_string()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let overrides = Config {
///     project: ProjectConfig {
///         version: Some("2.0".to_string()),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// let merged = ConfigMerger::merge(base, &overrides);
/// assert_eq!(merged.project.version.as_deref(), Some("2.0"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge the override tree over the base tree.
    ///
    /// The base is consumed; overrides win wherever both carry a value.
    #[must_use]
    pub fn merge(base: Config, overrides: &Config) -> Config {
        let mut result = base;
        Self::merge_into(&mut result, overrides);
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Leaves: source overwrites if `Some`, preserves if `None`
    /// - Sections: merged field-by-field, never replaced as a unit
    pub fn merge_into(target: &mut Config, source: &Config) {
        Self::merge_general(&mut target.general, &source.general);
        Self::merge_host(&mut target.host, &source.host);
        Self::merge_doc_tool(&mut target.doc_tool, &source.doc_tool);
        Self::merge_project(&mut target.project, &source.project);
    }

    fn merge_general(target: &mut GeneralConfig, source: &GeneralConfig) {
        if source.debug.is_some() {
            target.debug = source.debug;
        }
        if source.config_file.is_some() {
            target.config_file.clone_from(&source.config_file);
        }
    }

    fn merge_host(target: &mut HostConfig, source: &HostConfig) {
        if source.address.is_some() {
            target.address.clone_from(&source.address);
        }
        if source.port.is_some() {
            target.port = source.port;
        }
        if source.disable_tls.is_some() {
            target.disable_tls = source.disable_tls;
        }
        if source.login.is_some() {
            target.login.clone_from(&source.login);
        }
        if source.password.is_some() {
            target.password.clone_from(&source.password);
        }
    }

    fn merge_doc_tool(target: &mut DocToolConfig, source: &DocToolConfig) {
        if source.executable_path.is_some() {
            target.executable_path.clone_from(&source.executable_path);
        }
        if source.config_file_path.is_some() {
            target.config_file_path.clone_from(&source.config_file_path);
        }
    }

    fn merge_project(target: &mut ProjectConfig, source: &ProjectConfig) {
        if source.language.is_some() {
            target.language.clone_from(&source.language);
        }
        if source.version.is_some() {
            target.version.clone_from(&source.version);
        }
        if source.name.is_some() {
            target.name.clone_from(&source.name);
        }
    }
}

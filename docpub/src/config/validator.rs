//! Configuration validation.
//!
//! Validation checks the presence of required leaves in a fixed order and
//! stops at the first failure. It never mutates the tree and applies no
//! defaults; defaulting (port, TLS) happens where the values are consumed.

use crate::config::keys::{CanonicalKey, DocToolKey, HostKey, ProjectKey, Section};
use crate::config::schema::{Config, DocToolConfig, HostConfig, ProjectConfig};
use crate::error::{Error, Result};

/// Validates merged configuration trees.
///
/// The check order is fixed: host address, host login, host password,
/// doc-tool config file, project language. A run fails on the first
/// absent field, which is reported with its section.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a merged configuration tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the section and field of
    /// the first required leaf that is absent.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_host(&config.host)?;
        Self::validate_doc_tool(&config.doc_tool)?;
        Self::validate_project(&config.project)?;
        Ok(())
    }

    fn validate_host(host: &HostConfig) -> Result<()> {
        if host.address.is_none() {
            return Err(Self::missing(CanonicalKey::Host(HostKey::Address)));
        }
        if host.login.is_none() {
            return Err(Self::missing(CanonicalKey::Host(HostKey::Login)));
        }
        if host.password.is_none() {
            return Err(Self::missing(CanonicalKey::Host(HostKey::Password)));
        }
        Ok(())
    }

    fn validate_doc_tool(doc_tool: &DocToolConfig) -> Result<()> {
        if doc_tool.config_file_path.is_none() {
            return Err(Self::missing(CanonicalKey::DocTool(DocToolKey::ConfigFile)));
        }
        Ok(())
    }

    fn validate_project(project: &ProjectConfig) -> Result<()> {
        if project.language.is_none() {
            return Err(Self::missing(CanonicalKey::Project(ProjectKey::Language)));
        }
        Ok(())
    }

    fn missing(field: CanonicalKey) -> Error {
        // Every required field belongs to a section; fall back to General
        // rather than panic if that ever stops holding.
        let section = field.section().unwrap_or(Section::General);
        Error::MissingField { section, field }
    }
}

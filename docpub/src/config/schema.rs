//! Configuration schema shared by every source.
//!
//! A source tree may be partial: every leaf is optional, and sections are
//! always present as structs with `None` standing in for absence. The same
//! shape serves the file source, the CLI override source, and the merged
//! result; validation guarantees presence of the required leaves in the
//! merged tree without changing the type.

use std::path::PathBuf;

/// Top-level configuration keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Verbose diagnostic output.
    pub debug: Option<bool>,
    /// Path to the JSON configuration file used as the base source.
    pub config_file: Option<PathBuf>,
}

impl GeneralConfig {
    /// Whether the debug flag is set.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(false)
    }
}

/// Connection settings for the documentation hosting service
/// (`hostMyDocs` section).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Service address (hostname or IP, no scheme).
    pub address: Option<String>,
    /// Service port. Upload targets default this to 443.
    pub port: Option<u16>,
    /// Opt out of TLS. Upload targets treat absence as TLS enabled.
    pub disable_tls: Option<bool>,
    /// Account login.
    pub login: Option<String>,
    /// Account password.
    pub password: Option<String>,
}

/// Documentation tool invocation settings (`doxygen` section).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocToolConfig {
    /// Path to the doc-tool executable. Absence means the tool is looked
    /// up on `PATH`.
    pub executable_path: Option<PathBuf>,
    /// Path to the doc-tool configuration file.
    pub config_file_path: Option<PathBuf>,
}

/// Metadata for the published project (`project` section).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Programming language shown by the hosting service.
    pub language: Option<String>,
    /// Version to publish. Absence falls back to the doc-tool config's
    /// own version field.
    pub version: Option<String>,
    /// Name to publish. Absence falls back to the doc-tool config's own
    /// name field.
    pub name: Option<String>,
}

/// A full configuration tree.
///
/// # Examples
///
/// ```
/// use docpub::Config;
///
/// let mut config = Config::default();
/// assert!(config.is_empty());
///
/// config.host.address = Some("docs.example.com".to_string());
/// assert!(!config.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Top-level keys.
    pub general: GeneralConfig,
    /// The `hostMyDocs` section.
    pub host: HostConfig,
    /// The `doxygen` section.
    pub doc_tool: DocToolConfig,
    /// The `project` section.
    pub project: ProjectConfig,
}

impl Config {
    /// Whether no leaf carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

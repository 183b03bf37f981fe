//! Loading the JSON file source.
//!
//! The file source is normalized against the key registry rather than
//! deserialized into the schema directly: unrecognized keys, keys outside
//! their section, and leaves of the wrong type are dropped silently. Only
//! a missing file, unreadable content, or invalid JSON fail the load.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::keys::{
    canonicalize, CanonicalKey, DocToolKey, GeneralKey, HostKey, ProjectKey, Section,
};
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads configuration trees from JSON files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration tree from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFileNotFound`] if the path does not name a
    /// regular file, [`Error::Io`] if it cannot be read, and
    /// [`Error::ConfigParse`] if the content is not valid JSON. Content
    /// that parses but does not match the registry never fails; it is
    /// dropped.
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.is_file() {
            return Err(Error::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }

        log::debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;
        Ok(Self::from_value(&document))
    }

    /// Normalize a parsed JSON document against the key registry.
    fn from_value(document: &Value) -> Config {
        let mut config = Config::default();

        let Value::Object(root) = document else {
            log::debug!("configuration root is not an object; ignoring content");
            return config;
        };

        for (raw, entry) in root {
            let key = canonicalize(raw);

            if let Some(section) = key.opens_section() {
                if let Value::Object(fields) = entry {
                    Self::walk_section(&mut config, section, fields);
                } else {
                    log::debug!("section key '{raw}' has a non-object value; dropped");
                }
                continue;
            }

            match key {
                CanonicalKey::General(GeneralKey::Debug) => {
                    Self::set_bool(&mut config.general.debug, raw, entry);
                }
                CanonicalKey::General(GeneralKey::ConfigFile) => {
                    Self::set_path(&mut config.general.config_file, raw, entry);
                }
                _ => log::debug!("unrecognized top-level key '{raw}'; dropped"),
            }
        }

        config
    }

    fn walk_section(config: &mut Config, section: Section, fields: &serde_json::Map<String, Value>) {
        for (raw, entry) in fields {
            match (section, canonicalize(raw)) {
                (Section::Host, CanonicalKey::Host(HostKey::Address)) => {
                    Self::set_string(&mut config.host.address, raw, entry);
                }
                (Section::Host, CanonicalKey::Host(HostKey::Port)) => {
                    Self::set_port(&mut config.host.port, raw, entry);
                }
                (Section::Host, CanonicalKey::Host(HostKey::DisableTls)) => {
                    Self::set_bool(&mut config.host.disable_tls, raw, entry);
                }
                (Section::Host, CanonicalKey::Host(HostKey::Login)) => {
                    Self::set_string(&mut config.host.login, raw, entry);
                }
                (Section::Host, CanonicalKey::Host(HostKey::Password)) => {
                    Self::set_string(&mut config.host.password, raw, entry);
                }
                (Section::DocTool, CanonicalKey::DocTool(DocToolKey::Executable)) => {
                    Self::set_path(&mut config.doc_tool.executable_path, raw, entry);
                }
                (Section::DocTool, CanonicalKey::DocTool(DocToolKey::ConfigFile)) => {
                    Self::set_path(&mut config.doc_tool.config_file_path, raw, entry);
                }
                (Section::Project, CanonicalKey::Project(ProjectKey::Language)) => {
                    Self::set_string(&mut config.project.language, raw, entry);
                }
                (Section::Project, CanonicalKey::Project(ProjectKey::Version)) => {
                    Self::set_string(&mut config.project.version, raw, entry);
                }
                (Section::Project, CanonicalKey::Project(ProjectKey::Name)) => {
                    Self::set_string(&mut config.project.name, raw, entry);
                }
                _ => log::debug!("key '{raw}' not recognized in '{section}' section; dropped"),
            }
        }
    }

    fn set_string(slot: &mut Option<String>, raw: &str, entry: &Value) {
        match entry.as_str() {
            Some(text) => *slot = Some(text.to_string()),
            None => log::debug!("key '{raw}' expects a string value; dropped"),
        }
    }

    fn set_path(slot: &mut Option<PathBuf>, raw: &str, entry: &Value) {
        match entry.as_str() {
            Some(text) => *slot = Some(PathBuf::from(text)),
            None => log::debug!("key '{raw}' expects a string value; dropped"),
        }
    }

    fn set_bool(slot: &mut Option<bool>, raw: &str, entry: &Value) {
        match entry.as_bool() {
            Some(flag) => *slot = Some(flag),
            None => log::debug!("key '{raw}' expects a boolean value; dropped"),
        }
    }

    fn set_port(slot: &mut Option<u16>, raw: &str, entry: &Value) {
        match entry.as_u64().and_then(|port| u16::try_from(port).ok()) {
            Some(port) => *slot = Some(port),
            None => log::debug!("key '{raw}' expects a port number; dropped"),
        }
    }
}

//! Closed registry of recognized configuration keys.
//!
//! The configuration vocabulary is fixed: four sections, each with a small
//! set of leaf keys. Raw strings from any source resolve through
//! [`canonicalize`], which is pure and total: matching is exact and
//! case-sensitive, and anything outside the vocabulary maps to
//! [`CanonicalKey::Undefined`] instead of failing. Sources drop `Undefined`
//! keys before merging, so a merged configuration never carries one.

use std::fmt;

/// Configuration section identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Top-level keys: debug flag, config file path.
    General,
    /// Remote hosting service connection (`hostMyDocs`).
    Host,
    /// Documentation tool invocation (`doxygen`).
    DocTool,
    /// Project metadata (`project`).
    Project,
}

impl Section {
    /// The key naming this section in a configuration file, if any.
    ///
    /// General keys live directly at the top level and have no section
    /// key of their own.
    #[must_use]
    pub const fn file_key(self) -> Option<&'static str> {
        match self {
            Self::General => None,
            Self::Host => Some("hostMyDocs"),
            Self::DocTool => Some("doxygen"),
            Self::Project => Some("project"),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_key() {
            Some(key) => write!(f, "{key}"),
            None => write!(f, "general"),
        }
    }
}

/// Keys recognized at the top level of a configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralKey {
    /// Verbose diagnostic output (`debug`).
    Debug,
    /// Path to a JSON configuration file (`config_file`).
    ConfigFile,
}

impl GeneralKey {
    /// Every key in this section, in registry order.
    pub const ALL: [Self; 2] = [Self::Debug, Self::ConfigFile];

    /// The raw string form of this key.
    #[must_use]
    pub const fn raw(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::ConfigFile => "config_file",
        }
    }
}

/// Keys recognized inside the `hostMyDocs` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKey {
    /// The section key itself (`hostMyDocs`).
    Section,
    /// Hosting service address (`address`).
    Address,
    /// Hosting service port (`port`).
    Port,
    /// Opt out of TLS (`disable-tls`).
    DisableTls,
    /// Account login (`login`).
    Login,
    /// Account password (`password`).
    Password,
}

impl HostKey {
    /// Every key in this section, in registry order.
    pub const ALL: [Self; 6] = [
        Self::Section,
        Self::Address,
        Self::Port,
        Self::DisableTls,
        Self::Login,
        Self::Password,
    ];

    /// The raw string form of this key.
    #[must_use]
    pub const fn raw(self) -> &'static str {
        match self {
            Self::Section => "hostMyDocs",
            Self::Address => "address",
            Self::Port => "port",
            Self::DisableTls => "disable-tls",
            Self::Login => "login",
            Self::Password => "password",
        }
    }
}

/// Keys recognized inside the `doxygen` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocToolKey {
    /// Path to the doc-tool executable (`doxygen`). The same raw string
    /// also names the section itself, as in the historical file format.
    Executable,
    /// Path to the doc-tool configuration file (`doxyfile`).
    ConfigFile,
}

impl DocToolKey {
    /// Every key in this section, in registry order.
    pub const ALL: [Self; 2] = [Self::Executable, Self::ConfigFile];

    /// The raw string form of this key.
    #[must_use]
    pub const fn raw(self) -> &'static str {
        match self {
            Self::Executable => "doxygen",
            Self::ConfigFile => "doxyfile",
        }
    }
}

/// Keys recognized inside the `project` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKey {
    /// The section key itself (`project`).
    Section,
    /// Programming language of the documented project (`language`).
    Language,
    /// Version string published with the documentation (`version`).
    Version,
    /// Project name published with the documentation (`name`).
    Name,
}

impl ProjectKey {
    /// Every key in this section, in registry order.
    pub const ALL: [Self; 4] = [Self::Section, Self::Language, Self::Version, Self::Name];

    /// The raw string form of this key.
    #[must_use]
    pub const fn raw(self) -> &'static str {
        match self {
            Self::Section => "project",
            Self::Language => "language",
            Self::Version => "version",
            Self::Name => "name",
        }
    }
}

/// A raw key resolved against the registry.
///
/// `Undefined` is part of the type rather than an error case: resolution
/// always succeeds, and callers decide what to do with unrecognized input
/// (sources drop it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalKey {
    /// A top-level key.
    General(GeneralKey),
    /// A `hostMyDocs` section key.
    Host(HostKey),
    /// A `doxygen` section key.
    DocTool(DocToolKey),
    /// A `project` section key.
    Project(ProjectKey),
    /// Anything the registry does not recognize.
    Undefined,
}

impl CanonicalKey {
    /// The section this key belongs to, or `None` for `Undefined`.
    #[must_use]
    pub const fn section(self) -> Option<Section> {
        match self {
            Self::General(_) => Some(Section::General),
            Self::Host(_) => Some(Section::Host),
            Self::DocTool(_) => Some(Section::DocTool),
            Self::Project(_) => Some(Section::Project),
            Self::Undefined => None,
        }
    }

    /// The section this key opens when it appears at the top level of a
    /// file with an object value.
    ///
    /// `doxygen` plays a dual role: it opens the DocTool section at the
    /// top level and names the executable path inside it.
    #[must_use]
    pub const fn opens_section(self) -> Option<Section> {
        match self {
            Self::Host(HostKey::Section) => Some(Section::Host),
            Self::DocTool(DocToolKey::Executable) => Some(Section::DocTool),
            Self::Project(ProjectKey::Section) => Some(Section::Project),
            _ => None,
        }
    }

    /// The raw string form of this key.
    #[must_use]
    pub const fn raw(self) -> &'static str {
        match self {
            Self::General(key) => key.raw(),
            Self::Host(key) => key.raw(),
            Self::DocTool(key) => key.raw(),
            Self::Project(key) => key.raw(),
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Resolve a raw key string against the registry.
///
/// Sections are consulted in a fixed order (General, Host, DocTool,
/// Project) and the first exact match wins. Unrecognized input resolves to
/// [`CanonicalKey::Undefined`]; this function never fails.
///
/// # Examples
///
/// ```
/// use docpub::config::{canonicalize, CanonicalKey, HostKey};
///
/// assert_eq!(canonicalize("login"), CanonicalKey::Host(HostKey::Login));
/// assert_eq!(canonicalize("no-such-key"), CanonicalKey::Undefined);
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> CanonicalKey {
    for key in GeneralKey::ALL {
        if key.raw() == raw {
            return CanonicalKey::General(key);
        }
    }
    for key in HostKey::ALL {
        if key.raw() == raw {
            return CanonicalKey::Host(key);
        }
    }
    for key in DocToolKey::ALL {
        if key.raw() == raw {
            return CanonicalKey::DocTool(key);
        }
    }
    for key in ProjectKey::ALL {
        if key.raw() == raw {
            return CanonicalKey::Project(key);
        }
    }
    CanonicalKey::Undefined
}

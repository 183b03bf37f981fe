//! Upload target descriptors.

use crate::config::keys::{CanonicalKey, HostKey, Section};
use crate::config::schema::HostConfig;
use crate::error::{Error, Result};

/// Port used when the host section does not name one.
pub const DEFAULT_PORT: u16 = 443;

/// Connection descriptor for the documentation host.
///
/// Built from the host section of a resolved configuration. The port
/// defaults to [`DEFAULT_PORT`] and TLS stays enabled unless the
/// configuration disables it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    /// Host name or address, without scheme or port.
    pub address: String,
    /// TCP port of the host.
    pub port: u16,
    /// Whether to speak HTTPS.
    pub tls: bool,
    /// Login for HTTP basic authentication.
    pub login: String,
    /// Password for HTTP basic authentication.
    pub password: String,
}

impl UploadTarget {
    /// Build a target from a host section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when the address, login, or
    /// password is absent. A validated configuration never trips this.
    pub fn from_host(host: &HostConfig) -> Result<Self> {
        let address = host
            .address
            .clone()
            .ok_or_else(|| Self::missing(HostKey::Address))?;
        let login = host
            .login
            .clone()
            .ok_or_else(|| Self::missing(HostKey::Login))?;
        let password = host
            .password
            .clone()
            .ok_or_else(|| Self::missing(HostKey::Password))?;

        Ok(Self {
            address,
            port: host.port.unwrap_or(DEFAULT_PORT),
            tls: !host.disable_tls.unwrap_or(false),
            login,
            password,
        })
    }

    /// Render the base URL, `http(s)://address:port`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.address, self.port)
    }

    fn missing(field: HostKey) -> Error {
        Error::MissingField {
            section: Section::Host,
            field: CanonicalKey::Host(field),
        }
    }
}

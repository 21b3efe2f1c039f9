//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use employee_facade::settings::{AppSettings, SettingsError};
use url::Url;

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) upstream_base_url: Url,
    pub(crate) upstream_read_timeout: Duration,
}

impl ServerConfig {
    /// Construct a server configuration from already validated values.
    #[must_use]
    pub const fn new(
        bind_addr: SocketAddr,
        upstream_base_url: Url,
        upstream_read_timeout: Duration,
    ) -> Self {
        Self {
            bind_addr,
            upstream_base_url,
            upstream_read_timeout,
        }
    }

    /// Resolve defaults and validate the loaded settings.
    ///
    /// # Errors
    /// Returns the first [`SettingsError`] raised by the settings accessors.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(
            settings.bind_addr()?,
            settings.upstream_base_url()?,
            settings.upstream_read_timeout()?,
        ))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

//! Process configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEE_API_*` environment variables or a
//! configuration file. The read timeout carries an OrthoConfig default; the
//! address and URL are optional and the accessors fall back to their
//! defaults. Accessors reject values the server cannot start with.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8111";
const DEFAULT_UPSTREAM_BASE_URL: &str = "http://localhost:8112";

/// Reasons a configured value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address `{value}`: {message}")]
    BindAddr { value: String, message: String },
    /// The upstream base URL could not be parsed.
    #[error("invalid upstream base URL `{value}`: {message}")]
    UpstreamUrl { value: String, message: String },
    /// The upstream base URL does not use HTTP or HTTPS.
    #[error("upstream base URL `{value}` must use http or https")]
    UpstreamScheme { value: String },
    /// A zero read timeout would fail every upstream call.
    #[error("upstream read timeout must be at least one second")]
    ZeroTimeout,
}

/// Settings for the employee facade process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEE_API")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the upstream employee directory.
    pub upstream_base_url: Option<String>,
    /// Upstream read timeout in whole seconds.
    #[ortho_config(default = 10)]
    pub upstream_read_timeout_secs: u64,
}

impl AppSettings {
    /// Return the bind address, falling back to `0.0.0.0:8111`.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Return the upstream base URL, falling back to `http://localhost:8112`.
    ///
    /// # Errors
    /// Returns [`SettingsError::UpstreamUrl`] for unparseable values and
    /// [`SettingsError::UpstreamScheme`] for non-HTTP schemes.
    pub fn upstream_base_url(&self) -> Result<Url, SettingsError> {
        let value = self
            .upstream_base_url
            .as_deref()
            .unwrap_or(DEFAULT_UPSTREAM_BASE_URL);
        let url = Url::parse(value).map_err(|err| SettingsError::UpstreamUrl {
            value: value.to_owned(),
            message: err.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(SettingsError::UpstreamScheme {
                value: value.to_owned(),
            }),
        }
    }

    /// Return the upstream read timeout (ten seconds unless configured).
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroTimeout`] when configured as zero.
    pub fn upstream_read_timeout(&self) -> Result<Duration, SettingsError> {
        match self.upstream_read_timeout_secs {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}

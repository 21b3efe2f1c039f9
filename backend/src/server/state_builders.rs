//! Builders wiring the upstream adapter into the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use employee_facade::domain::EmployeeService;
use employee_facade::inbound::http::state::HttpState;
use employee_facade::outbound::employee_directory::HttpEmployeeDirectory;

use super::ServerConfig;

/// Build the shared HTTP state backed by the upstream employee directory.
///
/// A single [`EmployeeService`] serves both the query and command ports.
///
/// # Errors
/// Returns [`std::io::Error`] when the HTTP client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let directory = HttpEmployeeDirectory::new(
        config.upstream_base_url.clone(),
        config.upstream_read_timeout,
    )
    .map_err(|err| std::io::Error::other(format!("employee directory client failed: {err}")))?;
    info!(
        upstream = %config.upstream_base_url,
        read_timeout_secs = config.upstream_read_timeout.as_secs(),
        "employee directory adapter configured"
    );

    let service = Arc::new(EmployeeService::new(Arc::new(directory)));
    Ok(web::Data::new(HttpState::new(service.clone(), service)))
}

//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeesCommand, EmployeesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side employee use-cases.
    pub employees: Arc<dyn EmployeesQuery>,
    /// Write-side employee use-cases.
    pub employee_commands: Arc<dyn EmployeesCommand>,
}

impl HttpState {
    /// Construct state from the employee ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use employee_facade::domain::EmployeeService;
    /// use employee_facade::inbound::http::state::HttpState;
    /// use employee_facade::outbound::employee_directory::HttpEmployeeDirectory;
    ///
    /// let base_url = "http://localhost:8112".parse().expect("valid url");
    /// let directory = HttpEmployeeDirectory::new(base_url, Duration::from_secs(10))
    ///     .expect("client builds");
    /// let service = Arc::new(EmployeeService::new(Arc::new(directory)));
    /// let state = HttpState::new(service.clone(), service);
    /// let _employees = state.employees.clone();
    /// ```
    pub fn new(
        employees: Arc<dyn EmployeesQuery>,
        employee_commands: Arc<dyn EmployeesCommand>,
    ) -> Self {
        Self {
            employees,
            employee_commands,
        }
    }
}

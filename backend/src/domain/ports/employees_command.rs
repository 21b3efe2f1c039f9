//! Driving port for employee mutations forwarded upstream.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error, NewEmployee};

/// Use-case port for creating and deleting employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesCommand: Send + Sync {
    /// Create an employee and return the upstream record.
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, Error>;

    /// Delete the employee identified by `id` and return its name.
    ///
    /// Deletion is refused when the name is not unique at check time.
    async fn delete_employee(&self, id: &EmployeeId) -> Result<String, Error>;
}

//! Driving port for read-only employee views.
//!
//! HTTP handlers depend on this trait rather than on the upstream adapter so
//! they can be exercised with mocks.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error};

/// Use-case port for listing, searching and aggregating employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeesQuery: Send + Sync {
    /// Every employee, in upstream order.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Employees whose name contains `query`, ignoring case.
    async fn search_employees(&self, query: &str) -> Result<Vec<Employee>, Error>;

    /// One employee by identifier.
    async fn employee_by_id(&self, id: &EmployeeId) -> Result<Employee, Error>;

    /// Highest salary across all employees, `0` when there are none.
    async fn highest_salary(&self) -> Result<u32, Error>;

    /// Names of the `limit` best-paid employees, highest first.
    async fn top_earning_names(&self, limit: usize) -> Result<Vec<String>, Error>;
}

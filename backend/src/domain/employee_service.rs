//! Employee aggregation service.
//!
//! Implements the driving ports on top of an [`EmployeeDirectory`]. Every
//! read view starts from a fresh `list_all` so the service holds no state
//! beyond its directory handle.
//!
//! Deletion runs a check-then-call sequence (resolve id, count namesakes,
//! delete by name) without any lock: the upstream offers none, so a namesake
//! created between the count and the delete call goes unnoticed. The guard
//! only narrows the window; it cannot close it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::employee_aggregates::{
    count_sharing_name, highest_salary, search_by_name, top_earning_names,
};
use crate::domain::ports::{
    EmployeeDirectory, EmployeeDirectoryError, EmployeesCommand, EmployeesQuery,
};
use crate::domain::{Employee, EmployeeId, Error, NewEmployee};

pub(crate) const EMPLOYEE_NOT_FOUND_MESSAGE: &str = "Employee not found";
pub(crate) const RATE_LIMITED_MESSAGE: &str = "Too many requests, try again later";
pub(crate) const DELETION_AMBIGUOUS_MESSAGE: &str = "Cannot guarantee the deletion of the employee";
pub(crate) const DELETION_NOT_CONFIRMED_MESSAGE: &str =
    "Employee was not deleted, it might have been deleted by another request";

/// Employee service implementing [`EmployeesQuery`] and [`EmployeesCommand`].
#[derive(Clone)]
pub struct EmployeeService<D> {
    directory: Arc<D>,
}

impl<D> EmployeeService<D> {
    /// Create a service backed by `directory`.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D> EmployeeService<D>
where
    D: EmployeeDirectory,
{
    fn map_directory_error(err: EmployeeDirectoryError) -> Error {
        match err {
            EmployeeDirectoryError::NotFound { .. } => Error::not_found(EMPLOYEE_NOT_FOUND_MESSAGE),
            EmployeeDirectoryError::RateLimited { .. } => {
                Error::rate_limited(RATE_LIMITED_MESSAGE)
            }
            other => {
                error!(error = %other, "employee directory call failed");
                Error::internal(format!("employee directory failure: {other}"))
            }
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Employee>, Error> {
        self.directory
            .list_all()
            .await
            .map_err(Self::map_directory_error)
    }

    async fn fetch_one(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.directory
            .get_by_id(id)
            .await
            .map_err(Self::map_directory_error)
    }
}

#[async_trait]
impl<D> EmployeesQuery for EmployeeService<D>
where
    D: EmployeeDirectory,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        info!("listing all employees");
        self.fetch_all().await
    }

    async fn search_employees(&self, query: &str) -> Result<Vec<Employee>, Error> {
        // The query is personal data; keep it out of the logs.
        info!("searching employees by name");
        let employees = self.fetch_all().await?;
        Ok(search_by_name(employees, query))
    }

    async fn employee_by_id(&self, id: &EmployeeId) -> Result<Employee, Error> {
        info!(employee_id = %id, "fetching employee");
        self.fetch_one(id).await
    }

    async fn highest_salary(&self) -> Result<u32, Error> {
        info!("computing highest salary");
        let employees = self.fetch_all().await?;
        Ok(highest_salary(&employees))
    }

    async fn top_earning_names(&self, limit: usize) -> Result<Vec<String>, Error> {
        info!(limit, "ranking employees by salary");
        let employees = self.fetch_all().await?;
        Ok(top_earning_names(employees, limit))
    }
}

#[async_trait]
impl<D> EmployeesCommand for EmployeeService<D>
where
    D: EmployeeDirectory,
{
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, Error> {
        info!("creating employee");
        let created = self
            .directory
            .create(&employee)
            .await
            .map_err(Self::map_directory_error)?;
        info!(employee_id = %created.id, "employee created");
        Ok(created)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<String, Error> {
        info!(employee_id = %id, "deleting employee");
        let target = self.fetch_one(id).await?;

        let employees = self.fetch_all().await?;
        let namesakes = count_sharing_name(&employees, &target.name);
        info!(employee_id = %id, namesakes, "counted employees sharing the name");
        if namesakes != 1 {
            return Err(Error::deletion_ambiguous(DELETION_AMBIGUOUS_MESSAGE));
        }

        let deleted = self
            .directory
            .delete_by_name(&target.name)
            .await
            .map_err(Self::map_directory_error)?;
        if !deleted {
            return Err(Error::deletion_not_confirmed(
                DELETION_NOT_CONFIRMED_MESSAGE,
            ));
        }

        info!(employee_id = %id, "employee deleted");
        Ok(target.name)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;

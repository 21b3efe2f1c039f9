//! Driven port for the upstream employee directory.
//!
//! Each method maps one facade intent onto exactly one upstream call. No
//! method retries; retry policy, if any, belongs to the caller.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Employee, EmployeeId, NewEmployee};

define_port_error! {
    /// Errors surfaced by the employee directory adapter.
    pub enum EmployeeDirectoryError {
        /// The directory answered that no record matches.
        NotFound { message: String } =>
            "employee directory has no matching record: {message}",
        /// The directory asked the caller to back off.
        RateLimited { message: String } =>
            "employee directory rate limited request: {message}",
        /// The directory answered with a status the facade does not handle.
        UnhandledStatus { status: u16, body: String } =>
            "cannot handle http code: {status} ({body})",
        /// A success response lacked the expected payload.
        MissingPayload { operation: String } =>
            "employee directory returned no payload for {operation}",
        /// A response body could not be decoded.
        Decode { message: String } =>
            "employee directory response decode failed: {message}",
        /// The call did not complete within the configured read timeout.
        Timeout { message: String } =>
            "employee directory timeout: {message}",
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "employee directory transport failed: {message}",
    }
}

/// Port for reading and mutating the upstream employee collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Fetch the entire collection in upstream order. An empty collection is
    /// a valid answer.
    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeDirectoryError>;

    /// Fetch one record by identifier.
    async fn get_by_id(&self, id: &EmployeeId) -> Result<Employee, EmployeeDirectoryError>;

    /// Forward a validated creation request and return the stored record.
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, EmployeeDirectoryError>;

    /// Ask the directory to delete the first record whose name matches `name`
    /// exactly. Returns whether the directory reported a deletion.
    async fn delete_by_name(&self, name: &str) -> Result<bool, EmployeeDirectoryError>;
}

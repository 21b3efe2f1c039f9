//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_directory;
mod employees_command;
mod employees_query;

#[cfg(test)]
pub use employee_directory::MockEmployeeDirectory;
pub use employee_directory::{EmployeeDirectory, EmployeeDirectoryError};
#[cfg(test)]
pub use employees_command::MockEmployeesCommand;
pub use employees_command::EmployeesCommand;
#[cfg(test)]
pub use employees_query::MockEmployeesQuery;
pub use employees_query::EmployeesQuery;

//! Domain primitives, ports, and services.
//!
//! Purpose: Define the employee types the facade exposes, the pure views it
//! computes over one fetched collection, and the ports that connect the core
//! to its inbound and outbound adapters. Nothing here knows about HTTP.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Employee / NewEmployee — upstream record and validated creation request.
//! - EmployeeService — implements the driving ports over an employee directory.

pub mod employee;
pub mod employee_aggregates;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{
    Employee, EmployeeId, EmployeeIdValidationError, MAX_EMPLOYEE_AGE, MAX_EMPLOYEE_SALARY,
    MIN_EMPLOYEE_AGE, NewEmployee, NewEmployeeDraft, NewEmployeeValidationErrors,
    NewEmployeeViolation,
};
pub use self::employee_aggregates::{
    TOP_EARNERS_LIMIT, count_sharing_name, highest_salary, name_matches, search_by_name,
    top_earning_names,
};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, FieldViolation};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};


//! Employee directory outbound adapter.
//!
//! Thin reqwest implementation of the `EmployeeDirectory` port against the
//! upstream mock employee service. The adapter owns the wire field-name
//! table, the envelope DTOs, and the classification of error responses.

mod dto;
mod error_classifier;
mod field_names;
mod http_directory;

pub use field_names::{EmployeeField, employee_to_wire};
pub use http_directory::HttpEmployeeDirectory;

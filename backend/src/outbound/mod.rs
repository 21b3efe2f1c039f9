//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **employee_directory**: reqwest client for the upstream mock employee
//!   service, including its wire field-name table and error classification.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod employee_directory;

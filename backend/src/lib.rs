//! Employee facade library.
//!
//! A REST facade over the mock employee directory. The crate follows a
//! hexagonal layout: [`domain`] owns the types, aggregations and ports,
//! [`inbound`] exposes them over HTTP and [`outbound`] talks to the upstream
//! directory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested employee does not exist upstream.
    #[schema(rename = "not_found")]
    NotFound,
    /// The upstream directory asked callers to back off.
    #[schema(rename = "rate_limited")]
    RateLimited,
    /// The employee name is shared, so deletion by name is unsafe.
    #[schema(rename = "deletion_ambiguous")]
    DeletionAmbiguous,
    /// The upstream directory did not confirm the deletion.
    #[schema(rename = "deletion_not_confirmed")]
    DeletionNotConfirmed,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::FieldViolation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldViolation, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldViolationSchema {
    /// Offending payload field.
    #[schema(example = "age")]
    field_name: String,
    /// Constraint that was violated.
    #[schema(example = "Minimum age is 16")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Employee not found")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "6f1c1e3a-3c43-4d0f-9d2c-6b2b1f0a7e11")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
    /// Per-field violations; present only on rejected creation payloads.
    validation: Option<Vec<FieldViolationSchema>>,
}

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Employee)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    /// Upstream-assigned identifier.
    #[schema(example = "4a3a170b-22cd-4ac2-aad1-9bb5b34a1507")]
    id: String,
    /// Display name; not unique.
    #[schema(example = "Tiger Nixon")]
    name: String,
    /// Annual salary.
    #[schema(example = 320_800)]
    salary: u32,
    /// Age in years.
    #[schema(example = 61)]
    age: u32,
    /// Job title.
    #[schema(example = "Vice Chair Executive Principal of Chief Operations")]
    title: String,
    /// Contact email issued by the upstream directory.
    #[schema(example = "tnixon@company.com")]
    email: String,
}

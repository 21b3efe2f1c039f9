//! Shared validation helpers for inbound HTTP adapters.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::info;

use crate::domain::{EmployeeId, Error, FieldViolation, NewEmployeeValidationErrors};

/// Object name reported in creation validation messages.
pub(crate) const CREATE_EMPLOYEE_OBJECT: &str = "createEmployee";

/// Build the 400 payload for a rejected creation request, one entry per
/// violated field constraint.
pub(crate) fn creation_validation_error(errors: &NewEmployeeValidationErrors) -> Error {
    let validation: Vec<FieldViolation> = errors
        .violations()
        .iter()
        .map(|violation| FieldViolation::new(violation.field(), violation.to_string()))
        .collect();
    info!(
        violations = validation.len(),
        "rejected employee creation payload"
    );
    Error::invalid_request(format!(
        "Validation failed for object='{CREATE_EMPLOYEE_OBJECT}'. Error count: {}",
        validation.len()
    ))
    .with_validation(validation)
}

/// Parse an employee identifier from a path segment.
pub(crate) fn parse_employee_id(raw: String) -> Result<EmployeeId, Error> {
    EmployeeId::new(raw).map_err(|err| {
        Error::invalid_request("employee id must not be blank").with_details(json!({
            "field": "id",
            "code": "blank_employee_id",
            "reason": err.to_string(),
        }))
    })
}

/// `JsonConfig` error handler: malformed or mistyped bodies become 400
/// `invalid_request` errors instead of actix's plain-text default.
pub fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let error = Error::invalid_request("Malformed JSON request body").with_details(json!({
        "reason": err.to_string(),
    }));
    error.into()
}

//! DTOs for the upstream employee directory wire format.
//!
//! Responses arrive wrapped in an envelope; the adapter decodes the envelope
//! first and maps `data` into domain records afterwards so the field-name
//! table is applied in exactly one place.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field_names::wire_to_logical;
use crate::domain::{Employee, NewEmployee};

/// `{data, status, error}` wrapper around every upstream response.
#[derive(Debug, Deserialize)]
pub(super) struct EnvelopeDto<T> {
    pub(super) data: Option<T>,
    pub(super) status: Option<String>,
    pub(super) error: Option<Value>,
}

/// Creation payload; the upstream accepts plain field names on requests.
#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeDto<'a> {
    name: &'a str,
    salary: u32,
    age: u32,
    title: &'a str,
}

impl<'a> From<&'a NewEmployee> for CreateEmployeeDto<'a> {
    fn from(value: &'a NewEmployee) -> Self {
        Self {
            name: value.name(),
            salary: value.salary(),
            age: value.age(),
            title: value.title(),
        }
    }
}

/// Delete-by-name payload.
#[derive(Debug, Serialize)]
pub(super) struct DeleteEmployeeDto<'a> {
    pub(super) name: &'a str,
}

/// Decode one wire-shaped employee object into the domain record.
pub(super) fn employee_from_wire(value: Value) -> Result<Employee, String> {
    match value {
        Value::Object(object) => serde_json::from_value(Value::Object(wire_to_logical(object)))
            .map_err(|error| format!("invalid employee record: {error}")),
        other => Err(format!("expected employee object, found {}", kind_of(&other))),
    }
}

/// Decode a wire-shaped employee array, preserving upstream order.
pub(super) fn employees_from_wire(value: Value) -> Result<Vec<Employee>, String> {
    match value {
        Value::Array(items) => items.into_iter().map(employee_from_wire).collect(),
        other => Err(format!("expected employee array, found {}", kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

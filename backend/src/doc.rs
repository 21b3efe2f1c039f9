//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the employee endpoints and the health probes
//! - **Schemas**: domain type wrappers ([`EmployeeSchema`], [`ErrorSchema`],
//!   [`ErrorCodeSchema`], [`FieldViolationSchema`]) plus the creation payload
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::employees::CreateEmployeeRequest;
use crate::inbound::http::schemas::{
    EmployeeSchema, ErrorCodeSchema, ErrorSchema, FieldViolationSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee facade API",
        description = "Read, aggregate, create and delete employees held by the upstream directory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::search_employees,
        crate::inbound::http::employees::highest_salary,
        crate::inbound::http::employees::top_earning_names,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeSchema,
        ErrorSchema,
        ErrorCodeSchema,
        FieldViolationSchema,
        CreateEmployeeRequest
    )),
    tags(
        (name = "employees", description = "Employee directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! Employee HTTP handlers.
//!
//! ```text
//! GET    /api/v1/employee
//! GET    /api/v1/employee/search/{searchString}
//! GET    /api/v1/employee/highestSalary
//! GET    /api/v1/employee/topTenHighestEarningEmployeeNames
//! POST   /api/v1/employee
//! GET    /api/v1/employee/{id}
//! DELETE /api/v1/employee/{id}
//! ```
//!
//! Register the literal routes before the `{id}` routes (see
//! [`configure`]) so they are never captured as identifiers.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Employee, NewEmployee, NewEmployeeDraft, TOP_EARNERS_LIMIT};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeeSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{creation_validation_error, parse_employee_id};

/// Request payload for creating an employee.
///
/// Every field is optional at the decoding stage so that missing values are
/// reported as field violations rather than as a malformed body.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployeeRequest {
    /// Display name; must not be blank.
    #[schema(example = "Richard Test")]
    pub name: Option<String>,
    /// Annual salary; must be positive.
    #[schema(example = 12_345)]
    pub salary: Option<i64>,
    /// Age in years; 16 to 75 inclusive.
    #[schema(example = 32)]
    pub age: Option<i64>,
    /// Job title; must not be blank.
    #[schema(example = "Dr")]
    pub title: Option<String>,
}

impl From<CreateEmployeeRequest> for NewEmployeeDraft {
    fn from(value: CreateEmployeeRequest) -> Self {
        Self {
            name: value.name,
            salary: value.salary,
            age: value.age,
            title: value.title,
        }
    }
}

/// Mount every employee route on `cfg` in matching-safe order.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_employees)
        .service(search_employees)
        .service(highest_salary)
        .service(top_earning_names)
        .service(create_employee)
        .service(get_employee)
        .service(delete_employee);
}

/// List every employee in upstream order.
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    responses(
        (status = 200, description = "All employees", body = [EmployeeSchema]),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getAllEmployees"
)]
#[get("/employee")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees.list_employees().await?;
    Ok(web::Json(employees))
}

/// Employees whose name contains the search string, ignoring case.
#[utoipa::path(
    get,
    path = "/api/v1/employee/search/{searchString}",
    params(("searchString" = String, Path, description = "Name fragment to match")),
    responses(
        (status = 200, description = "Matching employees", body = [EmployeeSchema]),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployeesByNameSearch"
)]
#[get("/employee/search/{search_string}")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Employee>>> {
    let search_string = path.into_inner();
    let employees = state.employees.search_employees(&search_string).await?;
    Ok(web::Json(employees))
}

/// Highest salary across all employees; `0` when there are none.
#[utoipa::path(
    get,
    path = "/api/v1/employee/highestSalary",
    responses(
        (status = 200, description = "Highest salary", body = u32),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getHighestSalaryOfEmployees"
)]
#[get("/employee/highestSalary")]
pub async fn highest_salary(state: web::Data<HttpState>) -> ApiResult<web::Json<u32>> {
    let salary = state.employees.highest_salary().await?;
    Ok(web::Json(salary))
}

/// Names of the ten best-paid employees, highest salary first.
#[utoipa::path(
    get,
    path = "/api/v1/employee/topTenHighestEarningEmployeeNames",
    responses(
        (status = 200, description = "Employee names", body = [String]),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getTopTenHighestEarningEmployeeNames"
)]
#[get("/employee/topTenHighestEarningEmployeeNames")]
pub async fn top_earning_names(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<String>>> {
    let names = state.employees.top_earning_names(TOP_EARNERS_LIMIT).await?;
    Ok(web::Json(names))
}

/// Validate and forward a creation request.
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Created employee", body = EmployeeSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employee")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = NewEmployeeDraft::from(payload.into_inner());
    let new_employee =
        NewEmployee::try_from(draft).map_err(|errors| creation_validation_error(&errors))?;
    let created = state
        .employee_commands
        .create_employee(new_employee)
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/v1/employee/{id}",
    params(("id" = String, Path, description = "Upstream employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/employee/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Employee>> {
    let id = parse_employee_id(path.into_inner())?;
    let employee = state.employees.employee_by_id(&id).await?;
    Ok(web::Json(employee))
}

/// Delete one employee after checking its name is unique; responds with the
/// deleted name as plain text.
#[utoipa::path(
    delete,
    path = "/api/v1/employee/{id}",
    params(("id" = String, Path, description = "Upstream employee identifier")),
    responses(
        (status = 200, description = "Deleted employee name", body = String, content_type = "text/plain"),
        (status = 400, description = "Upstream did not confirm the deletion", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 429, description = "Upstream rate limited", body = ErrorSchema),
        (status = 500, description = "Deletion cannot be guaranteed", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployeeById"
)]
#[delete("/employee/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_employee_id(path.into_inner())?;
    let name = state.employee_commands.delete_employee(&id).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(name))
}

//! Employee directory handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Employee, EmployeeDetails, NewEmployee};
use crate::errors::AppResult;
use crate::types::Created;

/// Account + employee profile registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterEmployeeRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(alias = "secret")]
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "s3cret")]
    pub password: String,
    #[validate(length(min = 1, message = "Employee number is required"))]
    #[schema(example = "STF001")]
    pub employee_number: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[serde(default)]
    #[schema(example = "Network Technician")]
    pub job_title: String,
    #[serde(default)]
    #[schema(example = "IT Support")]
    pub division: String,
}

impl From<RegisterEmployeeRequest> for NewEmployee {
    fn from(req: RegisterEmployeeRequest) -> Self {
        NewEmployee {
            email: req.email,
            secret: req.password,
            details: EmployeeDetails {
                employee_number: req.employee_number,
                full_name: req.full_name,
                job_title: req.job_title,
                division: req.division,
            },
        }
    }
}

pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register_employee))
        .route("/employees", get(list_employees))
}

/// Register an account (role `user`) together with its employee profile
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Employees",
    security(("bearer_auth" = [])),
    request_body = RegisterEmployeeRequest,
    responses(
        (status = 201, description = "Employee registered", body = Employee),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn register_employee(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterEmployeeRequest>,
) -> AppResult<Created<Employee>> {
    tracing::debug!(by = current_user.account_id, "Registering employee");
    let employee = state.employee_service.register(payload.into()).await?;
    Ok(Created(employee))
}

/// List every employee profile
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All employee profiles", body = Vec<Employee>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list_all().await?;
    Ok(Json(employees))
}

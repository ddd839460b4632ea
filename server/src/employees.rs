//! REST routes for `/api/employees`.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::get,
};
use hr::{Department, EmployeeDto, EmployeeInput};
use platform_api::{ApiError, ApiResult};

use crate::http::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/departments", get(list_departments))
        .route(
            "/api/employees/department/{department}",
            get(employees_by_department),
        )
        .route(
            "/api/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<EmployeeDto>>> {
    Ok(Json(state.employees.get_all_employees().await?))
}

async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<EmployeeDto>> {
    let id = employee_id(id)?;
    Ok(Json(state.employees.get_employee_by_id(id).await?))
}

async fn employees_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> ApiResult<Json<Vec<EmployeeDto>>> {
    let department = department
        .parse::<Department>()
        .map_err(|err| ApiError::invalid(format!("Invalid department: {}", err.0)))?;
    Ok(Json(
        state.employees.get_employees_by_department(department).await?,
    ))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EmployeeDto>)> {
    let input = json_body(payload)?;
    let created = state.employees.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Json<EmployeeDto>> {
    let id = employee_id(id)?;
    let input = json_body(payload)?;
    Ok(Json(state.employees.update_employee(id, input).await?))
}

async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = employee_id(id)?;
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_departments(State(state): State<AppState>) -> Json<Vec<Department>> {
    Json(state.employees.departments())
}

fn employee_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::invalid(rejection.body_text()))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::invalid(rejection.body_text()))
}

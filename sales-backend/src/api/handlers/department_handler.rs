// src/api/handlers/department_handler.rs
use crate::api::dto::department_dto::{
    CreateDepartmentDto, DepartmentDto, TotalSalesDto, TotalSalesQuery, UpdateDepartmentDto,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedQuery, ValidatedUuid};
use crate::types::ApiResponse;
use crate::utils::error_helper::convert_validation_errors;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;
use validator::Validate;

pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<DepartmentDto>>> {
    let departments = app_state.department_service.find_all().await?;
    info!(count = departments.len(), "Departments listed");
    Ok(ApiResponse::success(departments))
}

pub async fn create_department_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentDto>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "department_handler::create_department"))?;

    info!(name = %payload.name, "Creating department");
    let department = app_state.department_service.insert(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(department)))
}

pub async fn get_department_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<DepartmentDto>> {
    let department = app_state.department_service.find_by_id(id).await?;
    Ok(ApiResponse::success(department))
}

pub async fn update_department_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateDepartmentDto>,
) -> AppResult<ApiResponse<DepartmentDto>> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "department_handler::update_department"))?;

    info!(department_id = %id, version = payload.version, "Updating department");
    let department = app_state.department_service.update(id, payload).await?;

    Ok(ApiResponse::success(department))
}

pub async fn delete_department_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(department_id = %id, "Deleting department");
    app_state.department_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn department_total_sales_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedQuery(query): ValidatedQuery<TotalSalesQuery>,
) -> AppResult<ApiResponse<TotalSalesDto>> {
    let total = app_state
        .department_service
        .total_sales(id, query.initial, query.final_date)
        .await?;
    Ok(ApiResponse::success(total))
}

pub fn department_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/departments",
            get(list_departments_handler).post(create_department_handler),
        )
        .route(
            "/departments/{id}",
            get(get_department_handler)
                .put(update_department_handler)
                .delete(delete_department_handler),
        )
        .route(
            "/departments/{id}/total-sales",
            get(department_total_sales_handler),
        )
        .with_state(app_state)
}

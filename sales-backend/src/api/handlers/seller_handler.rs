// src/api/handlers/seller_handler.rs
use crate::api::dto::department_dto::{TotalSalesDto, TotalSalesQuery};
use crate::api::dto::seller_dto::{
    CreateSellerDto, SellerDto, SellerFormOptionsDto, UpdateSellerDto,
};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
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
use tracing::{info, warn};
use validator::Validate;

pub async fn list_sellers_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<SellerDto>>> {
    let sellers = app_state.seller_service.find_all().await?;
    info!(count = sellers.len(), "Sellers listed");
    Ok(ApiResponse::success(sellers))
}

pub async fn seller_form_options_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<SellerFormOptionsDto>> {
    let options = app_state.seller_service.form_options().await?;
    Ok(ApiResponse::success(options))
}

pub async fn create_seller_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSellerDto>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "seller_handler::create_seller"))?;

    info!(
        name = %payload.name,
        department_id = %payload.department_id,
        "Creating seller"
    );
    let seller = app_state.seller_service.insert(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(seller)))
}

pub async fn get_seller_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<SellerDto>> {
    let seller = app_state.seller_service.find_by_id(id).await?;
    Ok(ApiResponse::success(seller))
}

pub async fn update_seller_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateSellerDto>,
) -> AppResult<ApiResponse<SellerDto>> {
    if payload.id != id {
        warn!(path_id = %id, body_id = %payload.id, "Seller update id mismatch");
        return Err(AppError::BadRequest("Id mismatch".to_string()));
    }

    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "seller_handler::update_seller"))?;

    info!(seller_id = %id, version = payload.version, "Updating seller");
    let seller = app_state.seller_service.update(id, payload).await?;

    Ok(ApiResponse::success(seller))
}

pub async fn delete_seller_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(seller_id = %id, "Deleting seller");
    app_state.seller_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn seller_total_sales_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedQuery(query): ValidatedQuery<TotalSalesQuery>,
) -> AppResult<ApiResponse<TotalSalesDto>> {
    let total = app_state
        .seller_service
        .total_sales(id, query.initial, query.final_date)
        .await?;
    Ok(ApiResponse::success(total))
}

pub fn seller_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/sellers",
            get(list_sellers_handler).post(create_seller_handler),
        )
        .route("/sellers/form-options", get(seller_form_options_handler))
        .route(
            "/sellers/{id}",
            get(get_seller_handler)
                .put(update_seller_handler)
                .delete(delete_seller_handler),
        )
        .route("/sellers/{id}/total-sales", get(seller_total_sales_handler))
        .with_state(app_state)
}

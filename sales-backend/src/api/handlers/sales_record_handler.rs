// src/api/handlers/sales_record_handler.rs
use crate::api::dto::sales_record_dto::{
    CreateSalesRecordDto, GroupedSalesSearchResponse, SalesRecordDto, SalesSearchResponse,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedQuery, ValidatedUuid};
use crate::types::{today, ApiResponse, DateRangeQuery};
use crate::utils::error_helper::convert_validation_errors;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;
use validator::Validate;

/// 期間検索（未指定の境界は今年の1月1日〜今日）
pub async fn simple_search_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DateRangeQuery>,
) -> AppResult<ApiResponse<SalesSearchResponse>> {
    let (min_date, max_date) = query.resolve(today());

    info!(%min_date, %max_date, "Sales simple search");
    let records = app_state
        .sales_record_service
        .find_by_date_range(Some(min_date), Some(max_date))
        .await?;

    Ok(ApiResponse::success(SalesSearchResponse::new(
        min_date, max_date, records,
    )))
}

/// 部署別グルーピング検索
pub async fn grouping_search_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<DateRangeQuery>,
) -> AppResult<ApiResponse<GroupedSalesSearchResponse>> {
    let (min_date, max_date) = query.resolve(today());

    info!(%min_date, %max_date, "Sales grouping search");
    let groups = app_state
        .sales_record_service
        .find_by_date_range_grouped(Some(min_date), Some(max_date))
        .await?;

    Ok(ApiResponse::success(GroupedSalesSearchResponse::new(
        min_date, max_date, groups,
    )))
}

pub async fn create_sales_record_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSalesRecordDto>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| convert_validation_errors(e, "sales_record_handler::create_sales_record"))?;

    info!(
        seller_id = %payload.seller_id,
        date = %payload.date,
        status = %payload.status,
        "Creating sales record"
    );
    let record = app_state.sales_record_service.insert(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(record)))
}

pub async fn get_sales_record_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<ApiResponse<SalesRecordDto>> {
    let record = app_state.sales_record_service.find_by_id(id).await?;
    Ok(ApiResponse::success(record))
}

pub async fn delete_sales_record_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<StatusCode> {
    info!(sales_record_id = %id, "Deleting sales record");
    app_state.sales_record_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn sales_record_router(app_state: AppState) -> Router {
    Router::new()
        .route("/sales-records", post(create_sales_record_handler))
        .route("/sales-records/simple-search", get(simple_search_handler))
        .route("/sales-records/grouping-search", get(grouping_search_handler))
        .route(
            "/sales-records/{id}",
            get(get_sales_record_handler).delete(delete_sales_record_handler),
        )
        .with_state(app_state)
}

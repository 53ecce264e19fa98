// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::logging::{inject_request_context, logging_middleware};
use crate::service::{
    department_service::DepartmentService, sales_record_service::SalesRecordService,
    seller_service::SellerService,
};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub department_service: Arc<DepartmentService>,
    pub seller_service: Arc<SellerService>,
    pub sales_record_service: Arc<SalesRecordService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db_pool: DbPool, config: AppConfig) -> Self {
        Self::from_services(
            Arc::new(DepartmentService::new(db_pool.clone())),
            Arc::new(SellerService::new(db_pool.clone())),
            Arc::new(SalesRecordService::new(db_pool)),
            config,
        )
    }

    pub fn from_services(
        department_service: Arc<DepartmentService>,
        seller_service: Arc<SellerService>,
        sales_record_service: Arc<SalesRecordService>,
        config: AppConfig,
    ) -> Self {
        Self {
            department_service,
            seller_service,
            sales_record_service,
            config: Arc::new(config),
        }
    }
}

/// 全ルーターを結合し、ロギング層を付与する
pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .merge(handlers::system_handler::system_router(app_state.clone()))
        .merge(handlers::department_handler::department_router(
            app_state.clone(),
        ))
        .merge(handlers::seller_handler::seller_router(app_state.clone()))
        .merge(handlers::sales_record_handler::sales_record_router(
            app_state,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
}

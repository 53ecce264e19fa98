// tests/common/app_helper.rs

use axum::Router;
use sales_backend::{
    api::{app_router, AppState},
    config::AppConfig,
    service::{
        department_service::DepartmentService, sales_record_service::SalesRecordService,
        seller_service::SellerService,
    },
};
use std::sync::Arc;

use crate::common::{self, mock_store::InMemoryStore};

/// インメモリストアで組み立てたサービス群
pub fn services_with(
    store: &InMemoryStore,
) -> (
    Arc<DepartmentService>,
    Arc<SellerService>,
    Arc<SalesRecordService>,
) {
    let shared = Arc::new(store.clone());

    (
        Arc::new(DepartmentService::with_stores(shared.clone(), shared.clone())),
        Arc::new(SellerService::with_stores(shared.clone(), shared.clone())),
        Arc::new(SalesRecordService::with_stores(shared.clone(), shared)),
    )
}

/// インメモリストアを使ったアプリのセットアップ（Docker 不要）
pub fn setup_app() -> (Router, InMemoryStore) {
    common::init_test_env();

    let store = InMemoryStore::new();
    let (department_service, seller_service, sales_record_service) = services_with(&store);
    let app_state = AppState::from_services(
        department_service,
        seller_service,
        sales_record_service,
        AppConfig::for_testing(),
    );

    (app_router(app_state), store)
}

/// Postgres コンテナを使ったアプリのセットアップ
pub async fn setup_db_app() -> (Router, common::db::TestDatabase) {
    common::init_test_env();

    let db = common::db::TestDatabase::new().await;
    let app_state = AppState::new(db.connection.clone(), AppConfig::for_testing());

    (app_router(app_state), db)
}

// src/main.rs
use migration::Migrator;
use sales_backend::api::{app_router, AppState};
use sales_backend::config::AppConfig;
use sales_backend::db::{create_db_pool, create_schema, schema_exists, DbPool};
use sales_backend::logging::init_tracing;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing();

    info!("Starting Sales Backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    info!(
        environment = %app_config.environment,
        server_addr = %app_config.server_addr(),
        schema = ?app_config.database.schema,
        "Configuration loaded"
    );

    let db_pool = connect(&app_config).await?;
    info!("Database pool created successfully.");

    if app_config.database.run_migrations {
        Migrator::up(&db_pool, None).await?;
        info!("Database migrations applied.");
    }

    let server_addr = app_config.server_addr();
    let app_state = AppState::new(db_pool, app_config);
    let app = app_router(app_state);

    info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// スキーマ指定があれば先に作成してから、search_path 付きの接続プールを作る
async fn connect(app_config: &AppConfig) -> Result<DbPool, Box<dyn std::error::Error>> {
    let Some(schema) = &app_config.database.schema else {
        return Ok(create_db_pool(&app_config.database).await?);
    };

    info!(schema = %schema, "Using schema");

    // まず基本接続を作成
    let mut base_config = app_config.database.clone();
    base_config.schema = None;
    base_config.max_connections = 1;
    let base_pool = create_db_pool(&base_config).await?;

    if !schema_exists(&base_pool, schema).await? {
        info!(schema = %schema, "Schema does not exist, creating it");
        create_schema(&base_pool, schema).await?;
    }
    base_pool.close().await?;

    Ok(create_db_pool(&app_config.database).await?)
}

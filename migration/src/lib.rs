// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20250801_000001_create_departments_table;
mod m20250801_000002_create_sellers_table;
mod m20250801_000003_create_sales_records_table;
mod m20250801_000004_add_sales_record_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20250801_000001_create_departments_table::Migration),
            // 2. 依存テーブル作成（departments → sellers → sales_records）
            Box::new(m20250801_000002_create_sellers_table::Migration),
            Box::new(m20250801_000003_create_sales_records_table::Migration),
            // 3. 検索用インデックス
            Box::new(m20250801_000004_add_sales_record_indexes::Migration),
        ]
    }
}

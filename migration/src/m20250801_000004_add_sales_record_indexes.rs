use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // date カラムにインデックスを追加（期間検索・降順ソート用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SalesRecords::Table)
                    .name("idx_sales_records_date")
                    .col(SalesRecords::Date)
                    .to_owned(),
            )
            .await?;

        // seller_id カラムにインデックスを追加（JOIN・削除時の参照チェック用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SalesRecords::Table)
                    .name("idx_sales_records_seller_id")
                    .col(SalesRecords::SellerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(SalesRecords::Table)
                    .name("idx_sales_records_seller_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(SalesRecords::Table)
                    .name("idx_sales_records_date")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SalesRecords {
    Table,
    Date,
    SellerId,
}

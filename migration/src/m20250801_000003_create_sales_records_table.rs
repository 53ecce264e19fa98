use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalesRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalesRecords::Date).date().not_null())
                    .col(
                        ColumnDef::new(SalesRecords::Amount)
                            .decimal_len(12, 2)
                            .not_null()
                            .check(Expr::col(SalesRecords::Amount).gte(0)),
                    )
                    .col(
                        ColumnDef::new(SalesRecords::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(SalesRecords::SellerId).uuid().not_null())
                    .col(
                        ColumnDef::new(SalesRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SalesRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 売上を持つ販売員は削除させない（CASCADE しない）
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_sales_records_seller_id")
                    .from(SalesRecords::Table, SalesRecords::SellerId)
                    .to(Sellers::Table, Sellers::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalesRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SalesRecords {
    Table,
    Id,
    Date,
    Amount,
    Status,
    SellerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sellers {
    Table,
    Id,
}

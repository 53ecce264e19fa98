// src/repository/sales_record_repository.rs
use crate::api::dto::sales_record_dto::CreateSalesRecordDto;
use crate::domain::sales_record_model::{
    self, ActiveModel as SalesRecordActiveModel, Entity as SalesRecordEntity,
};
use crate::domain::sales_report::{DepartmentRef, SalesRecordDetail, SellerRef};
use crate::domain::sales_status::SalesStatus;
use crate::domain::{department_model, seller_model};
use crate::repository::{classify_delete, DeleteOutcome};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{entity::*, DbConn, DbErr, FromQueryResult, JoinType, Set};
use sea_orm::{Condition, QueryFilter, QueryOrder, QuerySelect, Select};
use uuid::Uuid;

/// 売上レコードの永続化境界
#[async_trait]
pub trait SalesRecordStore: Send + Sync {
    /// 期間内（両端を含む）の売上を日付の降順で返す。None の境界は絞り込まない。
    async fn find_by_date_range(
        &self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<Vec<SalesRecordDetail>, DbErr>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SalesRecordDetail>, DbErr>;
    async fn create(
        &self,
        payload: &CreateSalesRecordDto,
    ) -> Result<sales_record_model::Model, DbErr>;
    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr>;
}

/// 売上・販売員・部署を一度に取得するための行
#[derive(Debug, FromQueryResult)]
struct SalesRecordRow {
    id: Uuid,
    date: NaiveDate,
    amount: Decimal,
    status: String,
    seller_id: Uuid,
    seller_name: String,
    seller_email: String,
    department_id: Uuid,
    department_name: String,
}

impl From<SalesRecordRow> for SalesRecordDetail {
    fn from(row: SalesRecordRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            amount: row.amount,
            status: SalesStatus::from_str(&row.status).unwrap_or_default(),
            seller: SellerRef {
                id: row.seller_id,
                name: row.seller_name,
                email: row.seller_email,
            },
            department: DepartmentRef {
                id: row.department_id,
                name: row.department_name,
            },
        }
    }
}

pub struct SalesRecordRepository {
    db: DbConn,
}

impl SalesRecordRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    fn detail_query() -> Select<SalesRecordEntity> {
        SalesRecordEntity::find()
            .select_only()
            .column(sales_record_model::Column::Id)
            .column(sales_record_model::Column::Date)
            .column(sales_record_model::Column::Amount)
            .column(sales_record_model::Column::Status)
            .column(sales_record_model::Column::SellerId)
            .column_as(seller_model::Column::Name, "seller_name")
            .column_as(seller_model::Column::Email, "seller_email")
            .column_as(department_model::Column::Id, "department_id")
            .column_as(department_model::Column::Name, "department_name")
            .join(JoinType::InnerJoin, sales_record_model::Relation::Seller.def())
            .join(JoinType::InnerJoin, seller_model::Relation::Department.def())
    }
}

#[async_trait]
impl SalesRecordStore for SalesRecordRepository {
    async fn find_by_date_range(
        &self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<Vec<SalesRecordDetail>, DbErr> {
        let mut condition = Condition::all();
        if let Some(min_date) = min_date {
            condition = condition.add(sales_record_model::Column::Date.gte(min_date));
        }
        if let Some(max_date) = max_date {
            condition = condition.add(sales_record_model::Column::Date.lte(max_date));
        }

        let rows = Self::detail_query()
            .filter(condition)
            .order_by_desc(sales_record_model::Column::Date)
            .into_model::<SalesRecordRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SalesRecordDetail>, DbErr> {
        let row = Self::detail_query()
            .filter(sales_record_model::Column::Id.eq(id))
            .into_model::<SalesRecordRow>()
            .one(&self.db)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn create(
        &self,
        payload: &CreateSalesRecordDto,
    ) -> Result<sales_record_model::Model, DbErr> {
        let mut active_model = <SalesRecordActiveModel as ActiveModelBehavior>::new();
        active_model.date = Set(payload.date);
        active_model.amount = Set(payload.amount);
        active_model.status = Set(payload.status.as_str().to_string());
        active_model.seller_id = Set(payload.seller_id);
        active_model.insert(&self.db).await
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr> {
        classify_delete(SalesRecordEntity::delete_by_id(id).exec(&self.db).await)
    }
}

// src/service/sales_record_service.rs

//! 売上レコードの登録・削除と期間検索

use crate::api::dto::sales_record_dto::{CreateSalesRecordDto, SalesRecordDto};
use crate::db::DbPool;
use crate::domain::sales_report::{group_by_department, DepartmentSales, SalesRecordDetail};
use crate::error::AppResult;
use crate::repository::{
    DeleteOutcome, SalesRecordRepository, SalesRecordStore, SellerRepository, SellerStore,
};
use crate::utils::error_helper::{
    integrity_error, internal_server_error, not_found_error, validation_error,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct SalesRecordService {
    sales_records: Arc<dyn SalesRecordStore>,
    sellers: Arc<dyn SellerStore>,
}

impl SalesRecordService {
    pub fn new(db_pool: DbPool) -> Self {
        Self::with_stores(
            Arc::new(SalesRecordRepository::new(db_pool.clone())),
            Arc::new(SellerRepository::new(db_pool)),
        )
    }

    pub fn with_stores(
        sales_records: Arc<dyn SalesRecordStore>,
        sellers: Arc<dyn SellerStore>,
    ) -> Self {
        Self {
            sales_records,
            sellers,
        }
    }

    /// 期間内の売上を日付の降順で返す
    ///
    /// 境界は両端を含む。None の境界はその側を絞り込まない。
    pub async fn find_by_date_range(
        &self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> AppResult<Vec<SalesRecordDetail>> {
        let records = self
            .sales_records
            .find_by_date_range(min_date, max_date)
            .await?;

        debug!(
            min_date = ?min_date,
            max_date = ?max_date,
            count = records.len(),
            "Sales records retrieved by date range"
        );
        Ok(records)
    }

    /// 期間内の売上を部署ごとにまとめる
    ///
    /// グループは日付降順の並びで各部署が最初に現れた順。
    pub async fn find_by_date_range_grouped(
        &self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> AppResult<Vec<DepartmentSales>> {
        let records = self.find_by_date_range(min_date, max_date).await?;
        Ok(group_by_department(records))
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<SalesRecordDto> {
        let record = self.sales_records.find_by_id(id).await?.ok_or_else(|| {
            not_found_error("SalesRecord", &id.to_string(), "sales_record_service::find_by_id")
        })?;
        Ok(record.into())
    }

    pub async fn insert(&self, payload: CreateSalesRecordDto) -> AppResult<SalesRecordDto> {
        const CONTEXT: &str = "sales_record_service::insert";

        if !self.sellers.exists(payload.seller_id).await? {
            return Err(validation_error("seller_id", "Seller not found"));
        }

        let created = self.sales_records.create(&payload).await?;
        info!(
            sales_record_id = %created.id,
            seller_id = %created.seller_id,
            amount = %created.amount,
            status = %created.status,
            "Sales record created"
        );

        let record = self
            .sales_records
            .find_by_id(created.id)
            .await?
            .ok_or_else(|| {
                internal_server_error(
                    format!("sales record {} vanished after insert", created.id),
                    CONTEXT,
                    "Failed to load the created sales record",
                )
            })?;
        Ok(record.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        const CONTEXT: &str = "sales_record_service::delete";

        match self.sales_records.delete(id).await? {
            DeleteOutcome::Deleted => {
                info!(sales_record_id = %id, "Sales record deleted");
                Ok(())
            }
            DeleteOutcome::NotFound => {
                Err(not_found_error("SalesRecord", &id.to_string(), CONTEXT))
            }
            DeleteOutcome::Restricted(detail) => Err(integrity_error(
                "Can't delete sales record because other records depend on it",
                CONTEXT,
                &detail,
            )),
        }
    }
}

// src/service/seller_service.rs

use crate::api::dto::department_dto::TotalSalesDto;
use crate::api::dto::seller_dto::{
    CreateSellerDto, SellerDto, SellerFormOptionsDto, UpdateSellerDto,
};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::repository::{
    DeleteOutcome, DepartmentRepository, DepartmentStore, SellerRepository, SellerStore,
};
use crate::utils::error_helper::{
    concurrency_error, integrity_error, not_found_error, validation_error,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct SellerService {
    sellers: Arc<dyn SellerStore>,
    departments: Arc<dyn DepartmentStore>,
}

impl SellerService {
    pub fn new(db_pool: DbPool) -> Self {
        Self::with_stores(
            Arc::new(SellerRepository::new(db_pool.clone())),
            Arc::new(DepartmentRepository::new(db_pool)),
        )
    }

    pub fn with_stores(sellers: Arc<dyn SellerStore>, departments: Arc<dyn DepartmentStore>) -> Self {
        Self {
            sellers,
            departments,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<SellerDto>> {
        let sellers = self.sellers.find_all().await?;
        Ok(sellers.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<SellerDto> {
        let seller = self.sellers.find_by_id(id).await?.ok_or_else(|| {
            not_found_error("Seller", &id.to_string(), "seller_service::find_by_id")
        })?;
        Ok(seller.into())
    }

    /// 作成・編集フォームで選べる部署
    pub async fn form_options(&self) -> AppResult<SellerFormOptionsDto> {
        let departments = self.departments.find_all().await?;
        Ok(SellerFormOptionsDto {
            departments: departments.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn insert(&self, payload: CreateSellerDto) -> AppResult<SellerDto> {
        self.ensure_department_exists(payload.department_id).await?;

        let created = self.sellers.create(&payload).await?;
        info!(
            seller_id = %created.id,
            department_id = %created.department_id,
            "Seller created"
        );

        self.find_by_id(created.id).await
    }

    pub async fn update(&self, id: Uuid, payload: UpdateSellerDto) -> AppResult<SellerDto> {
        const CONTEXT: &str = "seller_service::update";

        if !self.sellers.exists(id).await? {
            return Err(not_found_error("Seller", &id.to_string(), CONTEXT));
        }
        self.ensure_department_exists(payload.department_id).await?;

        let updated = self
            .sellers
            .update(id, &payload)
            .await?
            .ok_or_else(|| concurrency_error("Seller", &id.to_string(), CONTEXT))?;

        info!(seller_id = %id, version = updated.version, "Seller updated");
        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        const CONTEXT: &str = "seller_service::delete";

        match self.sellers.delete(id).await? {
            DeleteOutcome::Deleted => {
                info!(seller_id = %id, "Seller deleted");
                Ok(())
            }
            DeleteOutcome::NotFound => Err(not_found_error("Seller", &id.to_string(), CONTEXT)),
            DeleteOutcome::Restricted(detail) => Err(integrity_error(
                "Can't delete seller because he/she has sales",
                CONTEXT,
                &detail,
            )),
        }
    }

    pub async fn total_sales(
        &self,
        id: Uuid,
        initial: NaiveDate,
        final_date: NaiveDate,
    ) -> AppResult<TotalSalesDto> {
        let (seller, sales) = self.sellers.find_with_sales(id).await?.ok_or_else(|| {
            not_found_error("Seller", &id.to_string(), "seller_service::total_sales")
        })?;

        Ok(TotalSalesDto {
            id,
            initial,
            final_date,
            total: seller.total_sales(&sales, initial, final_date),
        })
    }

    async fn ensure_department_exists(&self, department_id: Uuid) -> AppResult<()> {
        match self.departments.find_by_id(department_id).await? {
            Some(_) => Ok(()),
            None => Err(validation_error("department_id", "Department not found")),
        }
    }
}


// src/service/department_service.rs

use crate::api::dto::department_dto::{
    CreateDepartmentDto, DepartmentDto, TotalSalesDto, UpdateDepartmentDto,
};
use crate::db::DbPool;
use crate::domain::sales_report::department_total_sales;
use crate::error::AppResult;
use crate::repository::{
    DeleteOutcome, DepartmentRepository, DepartmentStore, SellerRepository, SellerStore,
};
use crate::utils::error_helper::{concurrency_error, integrity_error, not_found_error};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct DepartmentService {
    departments: Arc<dyn DepartmentStore>,
    sellers: Arc<dyn SellerStore>,
}

impl DepartmentService {
    pub fn new(db_pool: DbPool) -> Self {
        Self::with_stores(
            Arc::new(DepartmentRepository::new(db_pool.clone())),
            Arc::new(SellerRepository::new(db_pool)),
        )
    }

    pub fn with_stores(departments: Arc<dyn DepartmentStore>, sellers: Arc<dyn SellerStore>) -> Self {
        Self {
            departments,
            sellers,
        }
    }

    pub async fn find_all(&self) -> AppResult<Vec<DepartmentDto>> {
        let departments = self.departments.find_all().await?;
        Ok(departments.into_iter().map(Into::into).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<DepartmentDto> {
        let department = self.departments.find_by_id(id).await?.ok_or_else(|| {
            not_found_error("Department", &id.to_string(), "department_service::find_by_id")
        })?;
        Ok(department.into())
    }

    pub async fn insert(&self, payload: CreateDepartmentDto) -> AppResult<DepartmentDto> {
        let created = self.departments.create(&payload).await?;
        info!(department_id = %created.id, name = %created.name, "Department created");
        Ok(created.into())
    }

    pub async fn update(&self, id: Uuid, payload: UpdateDepartmentDto) -> AppResult<DepartmentDto> {
        const CONTEXT: &str = "department_service::update";

        if self.departments.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Department", &id.to_string(), CONTEXT));
        }

        let updated = self
            .departments
            .update(id, &payload)
            .await?
            .ok_or_else(|| concurrency_error("Department", &id.to_string(), CONTEXT))?;

        info!(department_id = %id, version = updated.version, "Department updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        const CONTEXT: &str = "department_service::delete";

        match self.departments.delete(id).await? {
            DeleteOutcome::Deleted => {
                info!(department_id = %id, "Department deleted");
                Ok(())
            }
            DeleteOutcome::NotFound => Err(not_found_error("Department", &id.to_string(), CONTEXT)),
            DeleteOutcome::Restricted(detail) => Err(integrity_error(
                "Can't delete department because it has sellers",
                CONTEXT,
                &detail,
            )),
        }
    }

    /// 所属販売員の期間内売上の合計
    pub async fn total_sales(
        &self,
        id: Uuid,
        initial: NaiveDate,
        final_date: NaiveDate,
    ) -> AppResult<TotalSalesDto> {
        self.find_by_id(id).await?;

        let sellers = self.sellers.find_by_department_with_sales(id).await?;
        let total = department_total_sales(&sellers, initial, final_date);

        Ok(TotalSalesDto {
            id,
            initial,
            final_date,
            total,
        })
    }
}

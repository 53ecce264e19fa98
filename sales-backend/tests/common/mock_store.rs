// tests/common/mock_store.rs

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sales_backend::api::dto::department_dto::{CreateDepartmentDto, UpdateDepartmentDto};
use sales_backend::api::dto::sales_record_dto::CreateSalesRecordDto;
use sales_backend::api::dto::seller_dto::{CreateSellerDto, UpdateSellerDto};
use sales_backend::domain::sales_report::{
    sort_by_date_desc, within_range, DepartmentRef, SalesRecordDetail, SellerRef,
};
use sales_backend::domain::sales_status::SalesStatus;
use sales_backend::domain::{department_model, sales_record_model, seller_model};
use sales_backend::repository::seller_repository::SellerWithSales;
use sales_backend::repository::{
    DeleteOutcome, DepartmentStore, SalesRecordStore, SellerStore, SellerWithDepartment,
};
use sea_orm::DbErr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct StoreState {
    departments: Vec<department_model::Model>,
    sellers: Vec<seller_model::Model>,
    sales: Vec<sales_record_model::Model>,
}

impl StoreState {
    fn detail(&self, sale: &sales_record_model::Model) -> Option<SalesRecordDetail> {
        let seller = self.sellers.iter().find(|s| s.id == sale.seller_id)?;
        let department = self
            .departments
            .iter()
            .find(|d| d.id == seller.department_id)?;

        Some(SalesRecordDetail {
            id: sale.id,
            date: sale.date,
            amount: sale.amount,
            status: sale.get_status(),
            seller: SellerRef {
                id: seller.id,
                name: seller.name.clone(),
                email: seller.email.clone(),
            },
            department: DepartmentRef {
                id: department.id,
                name: department.name.clone(),
            },
        })
    }

    fn seller_with_department(&self, seller: &seller_model::Model) -> Option<SellerWithDepartment> {
        self.departments
            .iter()
            .find(|d| d.id == seller.department_id)
            .map(|department| (seller.clone(), department.clone()))
    }

    fn sales_of(&self, seller_id: Uuid) -> Vec<sales_record_model::Model> {
        self.sales
            .iter()
            .filter(|sale| sale.seller_id == seller_id)
            .cloned()
            .collect()
    }
}

/// 外部キー（RESTRICT）と楽観的ロックを再現するテスト用のインメモリストア
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_department(&self, name: &str) -> department_model::Model {
        let now = Utc::now();
        let department = department_model::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.state
            .lock()
            .unwrap()
            .departments
            .push(department.clone());
        department
    }

    pub fn add_seller(&self, department_id: Uuid, name: &str) -> seller_model::Model {
        let now = Utc::now();
        let seller = seller_model::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            birth_date: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
            base_salary: Decimal::new(300000, 2),
            department_id,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        self.state.lock().unwrap().sellers.push(seller.clone());
        seller
    }

    pub fn add_sale(
        &self,
        seller_id: Uuid,
        date: NaiveDate,
        amount: Decimal,
        status: SalesStatus,
    ) -> sales_record_model::Model {
        let now = Utc::now();
        let sale = sales_record_model::Model {
            id: Uuid::new_v4(),
            date,
            amount,
            status: status.as_str().to_string(),
            seller_id,
            created_at: now,
            updated_at: now,
        };
        self.state.lock().unwrap().sales.push(sale.clone());
        sale
    }

    /// 別リクエストによる更新を模してバージョンを進める
    pub fn bump_seller_version(&self, seller_id: Uuid) {
        let mut state = self.state.lock().unwrap();
        if let Some(seller) = state.sellers.iter_mut().find(|s| s.id == seller_id) {
            seller.version += 1;
        }
    }

    pub fn bump_department_version(&self, department_id: Uuid) {
        let mut state = self.state.lock().unwrap();
        if let Some(department) = state.departments.iter_mut().find(|d| d.id == department_id) {
            department.version += 1;
        }
    }

    pub fn sales_count(&self) -> usize {
        self.state.lock().unwrap().sales.len()
    }
}

#[async_trait]
impl DepartmentStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<department_model::Model>, DbErr> {
        let mut departments = self.state.lock().unwrap().departments.clone();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<department_model::Model>, DbErr> {
        let state = self.state.lock().unwrap();
        Ok(state.departments.iter().find(|d| d.id == id).cloned())
    }

    async fn create(&self, payload: &CreateDepartmentDto) -> Result<department_model::Model, DbErr> {
        Ok(self.add_department(payload.name.trim()))
    }

    async fn update(
        &self,
        id: Uuid,
        payload: &UpdateDepartmentDto,
    ) -> Result<Option<department_model::Model>, DbErr> {
        let mut state = self.state.lock().unwrap();
        let Some(department) = state
            .departments
            .iter_mut()
            .find(|d| d.id == id && d.version == payload.version)
        else {
            return Ok(None);
        };

        department.name = payload.name.trim().to_string();
        department.version += 1;
        department.updated_at = Utc::now();
        Ok(Some(department.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr> {
        let mut state = self.state.lock().unwrap();
        if state.sellers.iter().any(|s| s.department_id == id) {
            return Ok(DeleteOutcome::Restricted(
                "fk_sellers_department_id".to_string(),
            ));
        }

        let before = state.departments.len();
        state.departments.retain(|d| d.id != id);
        if state.departments.len() == before {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

#[async_trait]
impl SellerStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<SellerWithDepartment>, DbErr> {
        let state = self.state.lock().unwrap();
        let mut sellers: Vec<SellerWithDepartment> = state
            .sellers
            .iter()
            .filter_map(|seller| state.seller_with_department(seller))
            .collect();
        sellers.sort_by(|a, b| a.0.name.cmp(&b.0.name));
        Ok(sellers)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SellerWithDepartment>, DbErr> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sellers
            .iter()
            .find(|s| s.id == id)
            .and_then(|seller| state.seller_with_department(seller)))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        Ok(self.state.lock().unwrap().sellers.iter().any(|s| s.id == id))
    }

    async fn create(&self, payload: &CreateSellerDto) -> Result<seller_model::Model, DbErr> {
        let mut state = self.state.lock().unwrap();
        if !state.departments.iter().any(|d| d.id == payload.department_id) {
            return Err(DbErr::Custom("fk_sellers_department_id".to_string()));
        }

        let now = Utc::now();
        let seller = seller_model::Model {
            id: Uuid::new_v4(),
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            birth_date: payload.birth_date,
            base_salary: payload.base_salary,
            department_id: payload.department_id,
            version: 1,
            created_at: now,
            updated_at: now,
        };
        state.sellers.push(seller.clone());
        Ok(seller)
    }

    async fn update(
        &self,
        id: Uuid,
        payload: &UpdateSellerDto,
    ) -> Result<Option<seller_model::Model>, DbErr> {
        let mut state = self.state.lock().unwrap();
        let Some(seller) = state
            .sellers
            .iter_mut()
            .find(|s| s.id == id && s.version == payload.version)
        else {
            return Ok(None);
        };

        seller.name = payload.name.trim().to_string();
        seller.email = payload.email.trim().to_string();
        seller.birth_date = payload.birth_date;
        seller.base_salary = payload.base_salary;
        seller.department_id = payload.department_id;
        seller.version += 1;
        seller.updated_at = Utc::now();
        Ok(Some(seller.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr> {
        let mut state = self.state.lock().unwrap();
        if state.sales.iter().any(|sale| sale.seller_id == id) {
            return Ok(DeleteOutcome::Restricted(
                "fk_sales_records_seller_id".to_string(),
            ));
        }

        let before = state.sellers.len();
        state.sellers.retain(|s| s.id != id);
        if state.sellers.len() == before {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }

    async fn find_with_sales(&self, id: Uuid) -> Result<Option<SellerWithSales>, DbErr> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sellers
            .iter()
            .find(|s| s.id == id)
            .map(|seller| (seller.clone(), state.sales_of(seller.id))))
    }

    async fn find_by_department_with_sales(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<SellerWithSales>, DbErr> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sellers
            .iter()
            .filter(|s| s.department_id == department_id)
            .map(|seller| (seller.clone(), state.sales_of(seller.id)))
            .collect())
    }
}

#[async_trait]
impl SalesRecordStore for InMemoryStore {
    async fn find_by_date_range(
        &self,
        min_date: Option<NaiveDate>,
        max_date: Option<NaiveDate>,
    ) -> Result<Vec<SalesRecordDetail>, DbErr> {
        let state = self.state.lock().unwrap();
        let mut records: Vec<SalesRecordDetail> = state
            .sales
            .iter()
            .filter(|sale| within_range(sale.date, min_date, max_date))
            .filter_map(|sale| state.detail(sale))
            .collect();
        sort_by_date_desc(&mut records);
        Ok(records)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SalesRecordDetail>, DbErr> {
        let state = self.state.lock().unwrap();
        Ok(state
            .sales
            .iter()
            .find(|sale| sale.id == id)
            .and_then(|sale| state.detail(sale)))
    }

    async fn create(
        &self,
        payload: &CreateSalesRecordDto,
    ) -> Result<sales_record_model::Model, DbErr> {
        if !self
            .state
            .lock()
            .unwrap()
            .sellers
            .iter()
            .any(|s| s.id == payload.seller_id)
        {
            return Err(DbErr::Custom("fk_sales_records_seller_id".to_string()));
        }

        Ok(self.add_sale(
            payload.seller_id,
            payload.date,
            payload.amount,
            payload.status,
        ))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteOutcome, DbErr> {
        let mut state = self.state.lock().unwrap();
        let before = state.sales.len();
        state.sales.retain(|sale| sale.id != id);
        if state.sales.len() == before {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

/// 取得が常に失敗する売上ストア
pub struct FailingSalesRecordStore;

#[async_trait]
impl SalesRecordStore for FailingSalesRecordStore {
    async fn find_by_date_range(
        &self,
        _min_date: Option<NaiveDate>,
        _max_date: Option<NaiveDate>,
    ) -> Result<Vec<SalesRecordDetail>, DbErr> {
        Err(DbErr::Custom("connection reset by peer".to_string()))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<SalesRecordDetail>, DbErr> {
        Err(DbErr::Custom("connection reset by peer".to_string()))
    }

    async fn create(
        &self,
        _payload: &CreateSalesRecordDto,
    ) -> Result<sales_record_model::Model, DbErr> {
        Err(DbErr::Custom("connection reset by peer".to_string()))
    }

    async fn delete(&self, _id: Uuid) -> Result<DeleteOutcome, DbErr> {
        Err(DbErr::Custom("connection reset by peer".to_string()))
    }
}

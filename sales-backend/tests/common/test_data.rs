// tests/common/test_data.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sales_backend::api::dto::department_dto::{CreateDepartmentDto, UpdateDepartmentDto};
use sales_backend::api::dto::sales_record_dto::CreateSalesRecordDto;
use sales_backend::api::dto::seller_dto::{CreateSellerDto, UpdateSellerDto};
use sales_backend::domain::sales_status::SalesStatus;
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 小数点以下2桁の金額
pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn create_department_data(name: &str) -> CreateDepartmentDto {
    CreateDepartmentDto {
        name: name.to_string(),
    }
}

pub fn update_department_data(name: &str, version: i32) -> UpdateDepartmentDto {
    UpdateDepartmentDto {
        name: name.to_string(),
        version,
    }
}

pub fn create_seller_data(department_id: Uuid) -> CreateSellerDto {
    CreateSellerDto {
        name: "Bob Brown".to_string(),
        email: "bob@gmail.com".to_string(),
        birth_date: date(1998, 4, 21),
        base_salary: money(100000),
        department_id,
    }
}

pub fn update_seller_data(id: Uuid, department_id: Uuid, version: i32) -> UpdateSellerDto {
    UpdateSellerDto {
        id,
        name: "Bob Brown Jr".to_string(),
        email: "bob.jr@gmail.com".to_string(),
        birth_date: date(1998, 4, 21),
        base_salary: money(120000),
        department_id,
        version,
    }
}

pub fn create_sales_record_data(seller_id: Uuid, date: NaiveDate, cents: i64) -> CreateSalesRecordDto {
    CreateSalesRecordDto {
        date,
        amount: money(cents),
        status: SalesStatus::Billed,
        seller_id,
    }
}

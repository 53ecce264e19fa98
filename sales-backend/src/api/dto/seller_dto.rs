// src/api/dto/seller_dto.rs
use crate::api::dto::department_dto::DepartmentDto;
use crate::domain::sales_report::SellerRef;
use crate::domain::{department_model, seller_model};
use crate::utils::validation::{self, seller};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateSellerDto {
    #[validate(length(
        min = seller::NAME_MIN_LENGTH,
        max = seller::NAME_MAX_LENGTH,
        message = "Name size should be between 3 and 60"
    ))]
    pub name: String,

    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    pub birth_date: NaiveDate,

    #[validate(custom(function = validation::validate_base_salary))]
    pub base_salary: Decimal,

    pub department_id: Uuid,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct UpdateSellerDto {
    /// パスの id と一致しなければならない
    pub id: Uuid,

    #[validate(length(
        min = seller::NAME_MIN_LENGTH,
        max = seller::NAME_MAX_LENGTH,
        message = "Name size should be between 3 and 60"
    ))]
    pub name: String,

    #[validate(email(message = "Enter a valid email"))]
    pub email: String,

    pub birth_date: NaiveDate,

    #[validate(custom(function = validation::validate_base_salary))]
    pub base_salary: Decimal,

    pub department_id: Uuid,

    /// 読み込み時のバージョン（楽観的ロック）
    pub version: i32,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SellerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub base_salary: Decimal,
    pub department: DepartmentDto,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(seller_model::Model, department_model::Model)> for SellerDto {
    fn from((seller, department): (seller_model::Model, department_model::Model)) -> Self {
        Self {
            id: seller.id,
            name: seller.name,
            email: seller.email,
            birth_date: seller.birth_date,
            base_salary: seller.base_salary,
            department: department.into(),
            version: seller.version,
            created_at: seller.created_at,
            updated_at: seller.updated_at,
        }
    }
}

impl From<&seller_model::Model> for SellerRef {
    fn from(model: &seller_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            email: model.email.clone(),
        }
    }
}

/// 販売員フォーム用の選択肢
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SellerFormOptionsDto {
    pub departments: Vec<DepartmentDto>,
}

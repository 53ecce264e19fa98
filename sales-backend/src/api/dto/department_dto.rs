// src/api/dto/department_dto.rs
use crate::domain::department_model;
use crate::domain::sales_report::DepartmentRef;
use crate::utils::validation::{self, department};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateDepartmentDto {
    #[validate(
        length(
            min = department::NAME_MIN_LENGTH,
            max = department::NAME_MAX_LENGTH,
            message = "Name size should be between 1 and 60"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct UpdateDepartmentDto {
    #[validate(
        length(
            min = department::NAME_MIN_LENGTH,
            max = department::NAME_MAX_LENGTH,
            message = "Name size should be between 1 and 60"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub name: String,

    /// 読み込み時のバージョン（楽観的ロック）
    pub version: i32,
}

/// 売上合計の集計期間
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TotalSalesQuery {
    pub initial: NaiveDate,
    #[serde(rename = "final")]
    pub final_date: NaiveDate,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DepartmentDto {
    pub id: Uuid,
    pub name: String,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<department_model::Model> for DepartmentDto {
    fn from(model: department_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            version: model.version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&department_model::Model> for DepartmentRef {
    fn from(model: &department_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TotalSalesDto {
    pub id: Uuid,
    pub initial: NaiveDate,
    #[serde(rename = "final")]
    pub final_date: NaiveDate,
    pub total: Decimal,
}

// src/api/dto/sales_record_dto.rs
use crate::domain::sales_report::{DepartmentRef, DepartmentSales, SalesRecordDetail, SellerRef};
use crate::domain::sales_status::SalesStatus;
use crate::types::format_date;
use crate::utils::validation;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateSalesRecordDto {
    pub date: NaiveDate,

    #[validate(custom(function = validation::validate_non_negative_amount))]
    pub amount: Decimal,

    /// 省略時は Pending
    #[serde(default)]
    pub status: SalesStatus,

    pub seller_id: Uuid,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SalesRecordDto {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub status: SalesStatus,
    pub seller: SellerRef,
    pub department: DepartmentRef,
}

impl From<SalesRecordDetail> for SalesRecordDto {
    fn from(detail: SalesRecordDetail) -> Self {
        Self {
            id: detail.id,
            date: detail.date,
            amount: detail.amount,
            status: detail.status,
            seller: detail.seller,
            department: detail.department,
        }
    }
}

/// 期間検索の結果（日付降順）
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SalesSearchResponse {
    pub min_date: String,
    pub max_date: String,
    pub total_amount: Decimal,
    pub records: Vec<SalesRecordDto>,
}

impl SalesSearchResponse {
    pub fn new(min_date: NaiveDate, max_date: NaiveDate, records: Vec<SalesRecordDetail>) -> Self {
        let total_amount = records.iter().map(|record| record.amount).sum();
        Self {
            min_date: format_date(min_date),
            max_date: format_date(max_date),
            total_amount,
            records: records.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DepartmentSalesDto {
    pub department: DepartmentRef,
    pub total_amount: Decimal,
    pub records: Vec<SalesRecordDto>,
}

impl From<DepartmentSales> for DepartmentSalesDto {
    fn from(group: DepartmentSales) -> Self {
        let total_amount = group.total_amount();
        Self {
            department: group.department,
            total_amount,
            records: group.records.into_iter().map(Into::into).collect(),
        }
    }
}

/// 部署別グルーピング検索の結果
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupedSalesSearchResponse {
    pub min_date: String,
    pub max_date: String,
    pub groups: Vec<DepartmentSalesDto>,
}

impl GroupedSalesSearchResponse {
    pub fn new(min_date: NaiveDate, max_date: NaiveDate, groups: Vec<DepartmentSales>) -> Self {
        Self {
            min_date: format_date(min_date),
            max_date: format_date(max_date),
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }
}

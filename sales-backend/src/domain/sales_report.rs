// src/domain/sales_report.rs

//! 売上レポート（期間検索・部署別グルーピング）のドメイン型と集計処理

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::sales_record_model;
use super::sales_status::SalesStatus;
use super::seller_model;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerRef {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// 販売員・部署を解決済みの売上レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecordDetail {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub status: SalesStatus,
    pub seller: SellerRef,
    pub department: DepartmentRef,
}

/// 部署ごとの売上グループ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSales {
    pub department: DepartmentRef,
    pub records: Vec<SalesRecordDetail>,
}

impl DepartmentSales {
    pub fn total_amount(&self) -> Decimal {
        self.records.iter().map(|record| record.amount).sum()
    }
}

/// 日付が期間内か（境界は両端を含み、None の側は制約なし）
pub fn within_range(date: NaiveDate, min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> bool {
    min_date.is_none_or(|min| date >= min) && max_date.is_none_or(|max| date <= max)
}

/// 日付の降順に並べ替える（安定ソートなので同日の順序は入力順のまま）
pub fn sort_by_date_desc(records: &mut [SalesRecordDetail]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// 日付降順に並んだ売上を部署ごとに分割する
///
/// グループの並びは各部署が最初に現れた順。グループ内の順序は入力順を保つ。
pub fn group_by_department(records: Vec<SalesRecordDetail>) -> Vec<DepartmentSales> {
    let mut groups: Vec<DepartmentSales> = Vec::new();
    let mut index_by_department: HashMap<Uuid, usize> = HashMap::new();

    for record in records {
        match index_by_department.get(&record.department.id) {
            Some(&index) => groups[index].records.push(record),
            None => {
                index_by_department.insert(record.department.id, groups.len());
                groups.push(DepartmentSales {
                    department: record.department.clone(),
                    records: vec![record],
                });
            }
        }
    }

    groups
}

/// 期間内（両端を含む）の売上金額を合計する
pub fn sum_amounts_in_range<'a, I>(sales: I, initial: NaiveDate, final_date: NaiveDate) -> Decimal
where
    I: IntoIterator<Item = &'a sales_record_model::Model>,
{
    sales
        .into_iter()
        .filter(|sale| within_range(sale.date, Some(initial), Some(final_date)))
        .map(|sale| sale.amount)
        .sum()
}

/// 部署の売上合計 = 所属販売員それぞれの期間内売上の合計
pub fn department_total_sales(
    sellers: &[(seller_model::Model, Vec<sales_record_model::Model>)],
    initial: NaiveDate,
    final_date: NaiveDate,
) -> Decimal {
    sellers
        .iter()
        .map(|(seller, sales)| seller.total_sales(sales, initial, final_date))
        .sum()
}

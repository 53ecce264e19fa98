// src/repository/mod.rs
pub mod department_repository;
pub mod sales_record_repository;
pub mod seller_repository;

pub use department_repository::{DepartmentRepository, DepartmentStore};
pub use sales_record_repository::{SalesRecordRepository, SalesRecordStore};
pub use seller_repository::{SellerRepository, SellerStore, SellerWithDepartment};

use sea_orm::{DbErr, DeleteResult, SqlErr};

/// 削除操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// 外部キー制約により拒否された（依存レコードあり）
    Restricted(String),
}

/// 削除結果を分類する。外部キー違反は DbErr ではなく Restricted として返す。
pub(crate) fn classify_delete(result: Result<DeleteResult, DbErr>) -> Result<DeleteOutcome, DbErr> {
    match result {
        Ok(res) if res.rows_affected == 0 => Ok(DeleteOutcome::NotFound),
        Ok(_) => Ok(DeleteOutcome::Deleted),
        Err(err) => match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Ok(DeleteOutcome::Restricted(detail))
            }
            _ => Err(err),
        },
    }
}

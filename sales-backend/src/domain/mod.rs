// src/domain/mod.rs
pub mod department_model;
pub mod sales_record_model;
pub mod sales_report;
pub mod sales_status;
pub mod seller_model;

// src/service/mod.rs
pub mod department_service;
pub mod sales_record_service;
pub mod seller_service;

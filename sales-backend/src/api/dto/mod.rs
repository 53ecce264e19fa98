// src/api/dto/mod.rs
pub mod department_dto;
pub mod sales_record_dto;
pub mod seller_dto;

// src/api/handlers/mod.rs
pub mod department_handler;
pub mod sales_record_handler;
pub mod seller_handler;
pub mod system_handler;

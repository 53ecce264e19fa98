// src/extractors/mod.rs
pub mod request;
pub mod uuid;

pub use self::request::{ValidatedJson, ValidatedQuery};
pub use self::uuid::ValidatedUuid;

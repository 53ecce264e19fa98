pub mod datetime;
pub mod query;
pub mod response;

pub use datetime::{first_day_of_year, format_date, today};
pub use query::DateRangeQuery;
pub use response::ApiResponse;

pub mod query;
pub mod response;

pub use query::{deserialize_optional_i64, deserialize_optional_string, deserialize_present};
pub use response::ApiResponse;

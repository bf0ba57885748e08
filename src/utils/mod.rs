pub mod numeric;
pub mod parameter_error_handler;
pub mod query_builder;
pub mod validate;

pub use numeric::round_to_hundredths;
pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
pub use query_builder::{FilterQuery, UpdateQuery};

pub mod grade_inputs;

pub mod grades;

pub mod system;

pub use grade_inputs::configure_grade_inputs_routes;
pub use grades::configure_grades_routes;
pub use system::{configure_system_routes, route_not_found};

use actix_web::web;

use crate::utils::{json_error_handler, path_error_handler, query_error_handler};

/// 参数解析失败时统一返回 400
pub fn configure_extractors(cfg: &mut web::ServiceConfig, max_payload_size: usize) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::PayloadConfig::new(max_payload_size));
}

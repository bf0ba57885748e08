pub mod grade_inputs;
pub mod grades;
pub mod system;

pub use grade_inputs::GradeInputService;
pub use grades::GradeService;
pub use system::SystemService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::GradeApiError;
use crate::models::ApiResponse;

/// 将错误转换为统一的失败响应
///
/// 存储层故障会带上操作上下文记录日志。
pub(crate) fn error_response(context: &str, err: GradeApiError) -> HttpResponse {
    if err.is_store_failure() {
        error!("{}: {}", context, err);
    }
    HttpResponse::build(err.http_status()).json(ApiResponse::from_error(context, &err))
}

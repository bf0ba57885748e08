use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn index(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.index(&request).await
}

pub async fn health(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&request).await
}

/// 作为 App 的 default_service 使用
pub async fn route_not_found(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.route_not_found(&request).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health));
}

pub mod health;
pub mod index;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .expect("Storage not found in app data")
            .get_ref()
            .clone()
    }

    // 服务信息与接口列表
    pub async fn index(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        index::index(self, request).await
    }

    // 存活与数据库可达性检查
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        health::health(self, request).await
    }

    // 未匹配任何路由
    pub async fn route_not_found(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        index::route_not_found(request).await
    }
}

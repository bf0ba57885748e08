use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::warn;

use super::SystemService;
use crate::models::AppStartTime;
use crate::models::system::responses::HealthResponse;

/// 数据库不可达时返回 503 与 DEGRADED 状态，而不是 500
pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let now = chrono::Utc::now();
    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| now.signed_duration_since(start.start_datetime).num_seconds())
        .unwrap_or_default();

    match storage.ping().await {
        Ok(()) => Ok(HttpResponse::Ok().json(HealthResponse {
            success: true,
            status: "OK",
            database: "connected",
            message: None,
            error: None,
            uptime_seconds,
            timestamp: now,
        })),
        Err(e) => {
            warn!("Health check failed: {}", e);
            let error = service
                .get_config()
                .app
                .expose_error_details
                .then(|| e.message().to_string());
            Ok(HttpResponse::ServiceUnavailable().json(HealthResponse {
                success: false,
                status: "DEGRADED",
                database: "disconnected",
                message: Some("Database unreachable".to_string()),
                error,
                uptime_seconds,
                timestamp: now,
            }))
        }
    }
}

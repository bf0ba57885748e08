use chrono::{DateTime, Utc};
use serde::Serialize;

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub uptime_seconds: i64,
    pub timestamp: DateTime<Utc>,
}

/// 未匹配路由的响应
#[derive(Debug, Serialize)]
pub struct RouteNotFoundResponse {
    pub success: bool,
    pub message: String,
    pub path: String,
    pub method: String,
}

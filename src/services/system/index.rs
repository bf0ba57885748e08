use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::json;

use super::SystemService;
use crate::models::system::responses::RouteNotFoundResponse;

pub async fn index(service: &SystemService, _request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    Ok(HttpResponse::Ok().json(json!({
        "message": config.app.system_name,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "grades": {
                "getAll": "GET /api/grades?student_id&course_subject_id&enrollment_id",
                "getOne": "GET /api/grades/:id",
                "create": "POST /api/grades",
                "update": "PUT /api/grades/:id",
                "delete": "DELETE /api/grades/:id",
                "stats": "GET /api/grades/stats/:student_id"
            },
            "gradeInputs": {
                "getAll": "GET /api/grade_inputs?subject_grade_id&term&input_type",
                "getOne": "GET /api/grade_inputs/:id",
                "create": "POST /api/grade_inputs",
                "update": "PUT /api/grade_inputs/:id",
                "delete": "DELETE /api/grade_inputs/:id",
                "summary": "GET /api/grade_inputs/summary/:subject_grade_id"
            },
            "system": {
                "documentation": "GET /",
                "health": "GET /health"
            }
        }
    })))
}

pub async fn route_not_found(request: &HttpRequest) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::NotFound().json(RouteNotFoundResponse {
        success: false,
        message: "Route not found".to_string(),
        path: request.uri().to_string(),
        method: request.method().to_string(),
    }))
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::ApiResponse;
use crate::services::error_response;

// 没有成绩记录的学生同样返回 200，计数为 0
pub async fn get_student_stats(
    service: &GradeService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_stats(student_id).await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::data(stats))),
        Err(e) => Ok(error_response("Error fetching statistics", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeInputService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_subject_summary(
    service: &GradeInputService,
    request: &HttpRequest,
    subject_grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_input_summary(subject_grade_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::list(summary))),
        Err(e) => Ok(error_response("Error fetching grade input summary", e)),
    }
}

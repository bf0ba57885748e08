use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::errors::GradeApiError;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_grade(
    service: &GradeService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_grade_by_id(id).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::data(grade))),
        Ok(None) => Ok(error_response(
            "Error fetching grade",
            GradeApiError::not_found("Grade not found"),
        )),
        Err(e) => Ok(error_response("Error fetching grade", e)),
    }
}

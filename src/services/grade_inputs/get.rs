use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeInputService;
use crate::errors::GradeApiError;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn get_grade_input(
    service: &GradeInputService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_grade_input_by_id(id).await {
        Ok(Some(input)) => Ok(HttpResponse::Ok().json(ApiResponse::data(input))),
        Ok(None) => Ok(error_response(
            "Error fetching grade input",
            GradeApiError::not_found("Grade input not found"),
        )),
        Err(e) => Ok(error_response("Error fetching grade input", e)),
    }
}

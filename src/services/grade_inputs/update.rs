use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeInputService;
use crate::errors::GradeApiError;
use crate::models::{ApiResponse, grade_inputs::requests::UpdateGradeInputRequest};
use crate::services::error_response;
use crate::utils::validate::validate_update_grade_input;

pub async fn update_grade_input(
    service: &GradeInputService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateGradeInputRequest,
) -> ActixResult<HttpResponse> {
    // 只校验提供了的 input_type / term
    let changes = match validate_update_grade_input(update_data) {
        Ok(changes) => changes,
        Err(e) => return Ok(error_response("Error updating grade input", e)),
    };

    let storage = service.get_storage(request);

    match storage.update_grade_input(id, changes).await {
        Ok(Some(input)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            input,
            "Grade input updated successfully",
        ))),
        Ok(None) => Ok(error_response(
            "Error updating grade input",
            GradeApiError::not_found("Grade input not found"),
        )),
        Err(e) => Ok(error_response("Error updating grade input", e)),
    }
}

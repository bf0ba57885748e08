use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeInputService;
use crate::models::{ApiResponse, grade_inputs::requests::CreateGradeInputRequest};
use crate::services::error_response;
use crate::utils::validate::validate_create_grade_input;

pub async fn create_grade_input(
    service: &GradeInputService,
    request: &HttpRequest,
    input_data: CreateGradeInputRequest,
) -> ActixResult<HttpResponse> {
    // 必填字段与枚举值校验
    let new_input = match validate_create_grade_input(input_data) {
        Ok(input) => input,
        Err(e) => return Ok(error_response("Error creating grade input", e)),
    };

    let storage = service.get_storage(request);

    match storage.create_grade_input(new_input).await {
        Ok(input) => {
            info!(
                "Grade input {} ({}) created for subject grade {}",
                input.grade_input_id, input.input_type, input.subject_grade_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                input,
                "Grade input created successfully",
            )))
        }
        Err(e) => Ok(error_response("Error creating grade input", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::models::{ApiResponse, grades::requests::CreateGradeRequest};
use crate::services::error_response;
use crate::utils::validate::validate_create_grade;

pub async fn create_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    // 必填字段校验
    let new_grade = match validate_create_grade(grade_data) {
        Ok(grade) => grade,
        Err(e) => return Ok(error_response("Error creating grade", e)),
    };

    let storage = service.get_storage(request);

    match storage.create_grade(new_grade).await {
        Ok(grade) => {
            info!(
                "Grade {} created for student {} (course subject {})",
                grade.subject_grade_id, grade.student_id, grade.course_subject_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(grade, "Grade created successfully")))
        }
        Err(e) => Ok(error_response("Error creating grade", e)),
    }
}

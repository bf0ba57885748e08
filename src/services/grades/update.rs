use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::errors::GradeApiError;
use crate::models::{ApiResponse, grades::requests::UpdateGradeRequest};
use crate::services::error_response;

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_grade(id, update_data).await {
        Ok(Some(grade)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade updated successfully")))
        }
        Ok(None) => Ok(error_response(
            "Error updating grade",
            GradeApiError::not_found("Grade not found"),
        )),
        Err(e) => Ok(error_response("Error updating grade", e)),
    }
}

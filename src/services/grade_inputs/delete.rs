use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeInputService;
use crate::errors::GradeApiError;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_grade_input(
    service: &GradeInputService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade_input(id).await {
        Ok(true) => {
            info!("Grade input {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::deleted(
                id,
                "Grade input deleted successfully",
            )))
        }
        Ok(false) => Ok(error_response(
            "Error deleting grade input",
            GradeApiError::not_found("Grade input not found"),
        )),
        Err(e) => Ok(error_response("Error deleting grade input", e)),
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::errors::GradeApiError;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_grade(
    service: &GradeService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade(id).await {
        Ok(true) => {
            info!("Grade {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::deleted(id, "Grade deleted successfully")))
        }
        Ok(false) => Ok(error_response(
            "Error deleting grade",
            GradeApiError::not_found("Grade not found"),
        )),
        Err(e) => Ok(error_response("Error deleting grade", e)),
    }
}

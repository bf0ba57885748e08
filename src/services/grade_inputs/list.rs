use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeInputService;
use crate::models::{ApiResponse, grade_inputs::requests::GradeInputListQuery};
use crate::services::error_response;

pub async fn list_grade_inputs(
    service: &GradeInputService,
    request: &HttpRequest,
    query: GradeInputListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grade_inputs(query).await {
        Ok(inputs) => Ok(HttpResponse::Ok().json(ApiResponse::list(inputs))),
        Err(e) => Ok(error_response("Error fetching grade inputs", e)),
    }
}

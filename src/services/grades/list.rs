use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{ApiResponse, grades::requests::GradeListQuery};
use crate::services::error_response;

pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    query: GradeListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades(query).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::list(grades))),
        Err(e) => Ok(error_response("Error fetching grades", e)),
    }
}

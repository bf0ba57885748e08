//! 请求参数解析失败时的统一响应

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::ApiResponse;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid JSON body on {} {}: {}", req.method(), req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_with_detail(
        "Invalid JSON body",
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(
        "Invalid query string on {} {}: {}",
        req.method(),
        req.path(),
        err
    );
    let response = HttpResponse::BadRequest().json(ApiResponse::error_with_detail(
        "Invalid query parameters",
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Invalid path parameter on {} {}: {}", req.method(), req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_with_detail(
        "Invalid path parameter",
        err.to_string(),
    ));
    InternalError::from_response(err, response).into()
}

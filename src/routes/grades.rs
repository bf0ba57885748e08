use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest};
use crate::services::GradeService;

// 懒加载的全局 GRADE_SERVICE 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListQuery>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req, query.into_inner()).await
}

pub async fn get_grade(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(&req, id.into_inner()).await
}

pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .create_grade(&req, grade_data.into_inner())
        .await
}

pub async fn update_grade(
    req: HttpRequest,
    id: web::Path<i64>,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(&req, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&req, id.into_inner()).await
}

pub async fn get_student_stats(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .get_student_stats(&req, student_id.into_inner())
        .await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/grades")
            .service(
                web::resource("")
                    .route(web::get().to(list_grades))
                    .route(web::post().to(create_grade)),
            )
            .service(web::resource("/stats/{student_id}").route(web::get().to(get_student_stats)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_grade))
                    .route(web::put().to(update_grade))
                    .route(web::delete().to(delete_grade)),
            ),
    );
}

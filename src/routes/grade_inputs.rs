use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grade_inputs::requests::{
    CreateGradeInputRequest, GradeInputListQuery, UpdateGradeInputRequest,
};
use crate::services::GradeInputService;

// 懒加载的全局 GRADE_INPUT_SERVICE 实例
static GRADE_INPUT_SERVICE: Lazy<GradeInputService> = Lazy::new(GradeInputService::new_lazy);

// 第一版服务使用连字符路径，保留为别名
const SCOPES: [&str; 2] = ["/api/grade_inputs", "/api/grade-inputs"];

// HTTP处理程序
pub async fn list_grade_inputs(
    req: HttpRequest,
    query: web::Query<GradeInputListQuery>,
) -> ActixResult<HttpResponse> {
    GRADE_INPUT_SERVICE
        .list_grade_inputs(&req, query.into_inner())
        .await
}

pub async fn get_grade_input(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    GRADE_INPUT_SERVICE
        .get_grade_input(&req, id.into_inner())
        .await
}

pub async fn create_grade_input(
    req: HttpRequest,
    input_data: web::Json<CreateGradeInputRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_INPUT_SERVICE
        .create_grade_input(&req, input_data.into_inner())
        .await
}

pub async fn update_grade_input(
    req: HttpRequest,
    id: web::Path<i64>,
    update_data: web::Json<UpdateGradeInputRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_INPUT_SERVICE
        .update_grade_input(&req, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_grade_input(
    req: HttpRequest,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_INPUT_SERVICE
        .delete_grade_input(&req, id.into_inner())
        .await
}

pub async fn get_subject_summary(
    req: HttpRequest,
    subject_grade_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_INPUT_SERVICE
        .get_subject_summary(&req, subject_grade_id.into_inner())
        .await
}

// 配置路由
pub fn configure_grade_inputs_routes(cfg: &mut web::ServiceConfig) {
    for path in SCOPES {
        cfg.service(
            web::scope(path)
                .service(
                    web::resource("")
                        .route(web::get().to(list_grade_inputs))
                        .route(web::post().to(create_grade_input)),
                )
                .service(
                    web::resource("/summary/{subject_grade_id}")
                        .route(web::get().to(get_subject_summary)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(get_grade_input))
                        .route(web::put().to(update_grade_input))
                        .route(web::delete().to(delete_grade_input)),
                ),
        );
    }
}

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{CreateGradeRequest, GradeListQuery, UpdateGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 按条件获取成绩列表
    pub async fn list_grades(
        &self,
        request: &HttpRequest,
        query: GradeListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, request, query).await
    }

    // 根据 ID 获取成绩
    pub async fn get_grade(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_grade(self, request, id).await
    }

    pub async fn create_grade(
        &self,
        request: &HttpRequest,
        grade_data: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, request, grade_data).await
    }

    // 部分更新成绩
    pub async fn update_grade(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, request, id, update_data).await
    }

    pub async fn delete_grade(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, request, id).await
    }

    // 学生成绩统计
    pub async fn get_student_stats(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        stats::get_student_stats(self, request, student_id).await
    }
}

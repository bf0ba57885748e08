pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grade_inputs::requests::{
    CreateGradeInputRequest, GradeInputListQuery, UpdateGradeInputRequest,
};
use crate::storage::Storage;

pub struct GradeInputService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeInputService {
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

    // 按条件获取成绩构成项列表
    pub async fn list_grade_inputs(
        &self,
        request: &HttpRequest,
        query: GradeInputListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_grade_inputs(self, request, query).await
    }

    pub async fn get_grade_input(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_grade_input(self, request, id).await
    }

    pub async fn create_grade_input(
        &self,
        request: &HttpRequest,
        input_data: CreateGradeInputRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade_input(self, request, input_data).await
    }

    // 部分更新成绩构成项
    pub async fn update_grade_input(
        &self,
        request: &HttpRequest,
        id: i64,
        update_data: UpdateGradeInputRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade_input(self, request, id, update_data).await
    }

    pub async fn delete_grade_input(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade_input(self, request, id).await
    }

    // 按学期汇总某科目成绩的构成项
    pub async fn get_subject_summary(
        &self,
        request: &HttpRequest,
        subject_grade_id: i64,
    ) -> ActixResult<HttpResponse> {
        summary::get_subject_summary(self, request, subject_grade_id).await
    }
}

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    grade_inputs::{
        entities::GradeInput,
        requests::{GradeInputChanges, GradeInputListQuery, NewGradeInput},
        responses::TermInputSummary,
    },
    grades::{
        entities::Grade,
        requests::{GradeListQuery, NewGrade, UpdateGradeRequest},
        responses::StudentGradeStats,
    },
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 科目成绩方法
    // 按条件列出成绩（按创建时间倒序）
    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<Grade>>;
    // 通过ID获取成绩
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 创建成绩
    async fn create_grade(&self, grade: NewGrade) -> Result<Grade>;
    // 部分更新成绩，记录不存在时返回 None
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    // 删除成绩，记录不存在时返回 false
    async fn delete_grade(&self, id: i64) -> Result<bool>;
    // 学生成绩统计
    async fn get_student_stats(&self, student_id: i64) -> Result<StudentGradeStats>;

    /// 成绩构成项方法
    // 按条件列出成绩构成项（按创建时间倒序）
    async fn list_grade_inputs(&self, query: GradeInputListQuery) -> Result<Vec<GradeInput>>;
    // 通过ID获取成绩构成项
    async fn get_grade_input_by_id(&self, id: i64) -> Result<Option<GradeInput>>;
    // 创建成绩构成项
    async fn create_grade_input(&self, input: NewGradeInput) -> Result<GradeInput>;
    // 部分更新成绩构成项，记录不存在时返回 None
    async fn update_grade_input(
        &self,
        id: i64,
        changes: GradeInputChanges,
    ) -> Result<Option<GradeInput>>;
    // 删除成绩构成项，记录不存在时返回 false
    async fn delete_grade_input(&self, id: i64) -> Result<bool>;
    // 按学期汇总某科目成绩的构成项
    async fn get_subject_input_summary(
        &self,
        subject_grade_id: i64,
    ) -> Result<Vec<TermInputSummary>>;

    /// 连接管理
    // 检查数据库是否可达
    async fn ping(&self) -> Result<()>;
    // 关闭连接池
    async fn close(&self) -> Result<()>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}

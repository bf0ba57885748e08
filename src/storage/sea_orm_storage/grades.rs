//! 科目成绩存储操作

use super::SeaOrmStorage;
use crate::entity::subject_grades::{ActiveModel, Column, Entity as SubjectGrades};
use crate::errors::{GradeApiError, Result};
use crate::models::grades::{
    entities::Grade,
    requests::{GradeListQuery, NewGrade, UpdateGradeRequest},
    responses::StudentGradeStats,
};
use crate::utils::query_builder::placeholder;
use crate::utils::{FilterQuery, UpdateQuery, round_to_hundredths};
use sea_orm::{ActiveModelTrait, EntityTrait, FromQueryResult, Set, Statement, Value};

pub(crate) const REMARKS_PASSED: &str = "Passed";
pub(crate) const REMARKS_FAILED: &str = "Failed";

impl SeaOrmStorage {
    /// 按条件列出成绩
    pub async fn list_grades_impl(&self, query: GradeListQuery) -> Result<Vec<Grade>> {
        let stmt = FilterQuery::<SubjectGrades>::new(Column::CreatedAt)
            .eq(Column::StudentId, query.student_id)
            .eq(Column::CourseSubjectId, query.course_subject_id)
            .eq(Column::EnrollmentId, query.enrollment_id)
            .build(self.db.get_database_backend());

        let grades = SubjectGrades::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await
            .map_err(|e| GradeApiError::database_operation(format!("Failed to list grades: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = SubjectGrades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| GradeApiError::database_operation(format!("Failed to fetch grade: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 创建成绩
    pub async fn create_grade_impl(&self, grade: NewGrade) -> Result<Grade> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            student_id: Set(grade.student_id),
            enrollment_id: Set(grade.enrollment_id),
            course_subject_id: Set(grade.course_subject_id),
            midterm_grade: Set(grade.midterm_grade),
            finals_grade: Set(grade.finals_grade),
            subject_grade: Set(grade.subject_grade),
            remarks: Set(grade.remarks),
            finalized_by: Set(grade.finalized_by),
            finalized_at: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradeApiError::database_operation(format!("Failed to create grade: {e}")))?;

        Ok(result.into_grade())
    }

    /// 部分更新成绩
    ///
    /// finalized_at 与 updated_at 每次都会刷新，即使没有字段发生变化。
    pub async fn update_grade_impl(
        &self,
        id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        let now = chrono::Utc::now();

        let stmt = UpdateQuery::<SubjectGrades>::new(Column::SubjectGradeId, id)
            .coalesce(Column::StudentId, update.student_id)
            .coalesce(Column::EnrollmentId, update.enrollment_id)
            .coalesce(Column::CourseSubjectId, update.course_subject_id)
            .coalesce(Column::MidtermGrade, update.midterm_grade)
            .coalesce(Column::FinalsGrade, update.finals_grade)
            .coalesce(Column::SubjectGrade, update.subject_grade)
            .coalesce(Column::Remarks, update.remarks)
            .coalesce(Column::FinalizedBy, update.finalized_by)
            .set(Column::FinalizedAt, now)
            .set(Column::UpdatedAt, now)
            .build(self.db.get_database_backend());

        let result = SubjectGrades::find()
            .from_raw_sql(stmt)
            .one(&self.db)
            .await
            .map_err(|e| GradeApiError::database_operation(format!("Failed to update grade: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 删除成绩
    pub async fn delete_grade_impl(&self, id: i64) -> Result<bool> {
        let result = SubjectGrades::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| GradeApiError::database_operation(format!("Failed to delete grade: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生成绩统计
    ///
    /// 聚合查询没有 GROUP BY，总会返回一行；没有记录时计数为 0、其余为 null。
    /// remarks 按大小写敏感的完全匹配计数。
    pub async fn get_student_stats_impl(&self, student_id: i64) -> Result<StudentGradeStats> {
        let backend = self.db.get_database_backend();
        let sql = format!(
            "SELECT \
                COUNT(*) AS total_subjects, \
                AVG(subject_grade) AS average_grade, \
                MAX(subject_grade) AS highest_grade, \
                MIN(subject_grade) AS lowest_grade, \
                COUNT(CASE WHEN remarks = {} THEN 1 END) AS passed_count, \
                COUNT(CASE WHEN remarks = {} THEN 1 END) AS failed_count \
             FROM tbl_grades_subject_grade \
             WHERE student_id = {}",
            placeholder(backend, 1),
            placeholder(backend, 2),
            placeholder(backend, 3),
        );
        let stmt = Statement::from_sql_and_values(
            backend,
            sql,
            [
                Value::from(REMARKS_PASSED),
                Value::from(REMARKS_FAILED),
                Value::from(student_id),
            ],
        );

        let stats = StudentGradeStats::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                GradeApiError::database_operation(format!("Failed to compute student statistics: {e}"))
            })?
            .unwrap_or_default();

        Ok(StudentGradeStats {
            average_grade: stats.average_grade.map(round_to_hundredths),
            ..stats
        })
    }
}

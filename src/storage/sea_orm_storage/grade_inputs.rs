//! 成绩构成项存储操作

use super::SeaOrmStorage;
use crate::entity::grade_inputs::{ActiveModel, Column, Entity as GradeInputs};
use crate::errors::{GradeApiError, Result};
use crate::models::grade_inputs::{
    entities::GradeInput,
    requests::{GradeInputChanges, GradeInputListQuery, NewGradeInput},
    responses::TermInputSummary,
};
use crate::utils::query_builder::placeholder;
use crate::utils::{FilterQuery, UpdateQuery, round_to_hundredths};
use sea_orm::{ActiveModelTrait, EntityTrait, FromQueryResult, Set, Statement, Value};

impl SeaOrmStorage {
    /// 按条件列出成绩构成项
    pub async fn list_grade_inputs_impl(
        &self,
        query: GradeInputListQuery,
    ) -> Result<Vec<GradeInput>> {
        let stmt = FilterQuery::<GradeInputs>::new(Column::CreatedAt)
            .eq(Column::SubjectGradeId, query.subject_grade_id)
            .eq(Column::Term, query.term)
            .eq(Column::InputType, query.input_type)
            .build(self.db.get_database_backend());

        let inputs = GradeInputs::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                GradeApiError::database_operation(format!("Failed to list grade inputs: {e}"))
            })?;

        Ok(inputs.into_iter().map(|m| m.into_grade_input()).collect())
    }

    /// 通过 ID 获取成绩构成项
    pub async fn get_grade_input_by_id_impl(&self, id: i64) -> Result<Option<GradeInput>> {
        let result = GradeInputs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                GradeApiError::database_operation(format!("Failed to fetch grade input: {e}"))
            })?;

        Ok(result.map(|m| m.into_grade_input()))
    }

    /// 创建成绩构成项
    pub async fn create_grade_input_impl(&self, input: NewGradeInput) -> Result<GradeInput> {
        let now = chrono::Utc::now();

        let model = ActiveModel {
            subject_grade_id: Set(input.subject_grade_id),
            input_type: Set(input.input_type.to_string()),
            input_name: Set(input.input_name),
            score: Set(input.score),
            term: Set(input.term.to_string()),
            created_by: Set(input.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            GradeApiError::database_operation(format!("Failed to create grade input: {e}"))
        })?;

        Ok(result.into_grade_input())
    }

    /// 部分更新成绩构成项，只刷新 updated_at
    pub async fn update_grade_input_impl(
        &self,
        id: i64,
        changes: GradeInputChanges,
    ) -> Result<Option<GradeInput>> {
        let now = chrono::Utc::now();

        let stmt = UpdateQuery::<GradeInputs>::new(Column::GradeInputId, id)
            .coalesce(
                Column::InputType,
                changes.input_type.map(|t| t.as_str().to_string()),
            )
            .coalesce(Column::InputName, changes.input_name)
            .coalesce(Column::Score, changes.score)
            .coalesce(Column::Term, changes.term.map(|t| t.as_str().to_string()))
            .set(Column::UpdatedAt, now)
            .build(self.db.get_database_backend());

        let result = GradeInputs::find()
            .from_raw_sql(stmt)
            .one(&self.db)
            .await
            .map_err(|e| {
                GradeApiError::database_operation(format!("Failed to update grade input: {e}"))
            })?;

        Ok(result.map(|m| m.into_grade_input()))
    }

    /// 删除成绩构成项
    pub async fn delete_grade_input_impl(&self, id: i64) -> Result<bool> {
        let result = GradeInputs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                GradeApiError::database_operation(format!("Failed to delete grade input: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 按学期汇总某科目成绩下的构成项，学期升序
    pub async fn get_subject_input_summary_impl(
        &self,
        subject_grade_id: i64,
    ) -> Result<Vec<TermInputSummary>> {
        let backend = self.db.get_database_backend();
        let sql = format!(
            "SELECT \
                term, \
                COUNT(*) AS input_count, \
                AVG(score) AS average_score, \
                MAX(score) AS highest_score, \
                MIN(score) AS lowest_score \
             FROM tbl_grade_grade_input \
             WHERE subject_grade_id = {} \
             GROUP BY term \
             ORDER BY term ASC",
            placeholder(backend, 1),
        );
        let stmt = Statement::from_sql_and_values(backend, sql, [Value::from(subject_grade_id)]);

        let rows = TermInputSummary::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                GradeApiError::database_operation(format!(
                    "Failed to summarize grade inputs: {e}"
                ))
            })?;

        Ok(rows
            .into_iter()
            .map(|row| TermInputSummary {
                average_score: row.average_score.map(round_to_hundredths),
                ..row
            })
            .collect())
    }
}

//! 成绩构成项实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tbl_grade_grade_input")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub grade_input_id: i64,
    pub subject_grade_id: i64,
    pub input_type: String,
    pub input_name: String,
    // 列本身为 NOT NULL，显式的 null 交由数据库拒绝
    pub score: Option<f64>,
    pub term: String,
    pub created_by: Option<i64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject_grades::Entity",
        from = "Column::SubjectGradeId",
        to = "super::subject_grades::Column::SubjectGradeId"
    )]
    SubjectGrade,
}

impl Related<super::subject_grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectGrade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade_input(self) -> crate::models::grade_inputs::entities::GradeInput {
        use crate::models::grade_inputs::entities::GradeInput;

        GradeInput {
            grade_input_id: self.grade_input_id,
            subject_grade_id: self.subject_grade_id,
            input_type: self.input_type,
            input_name: self.input_name,
            score: self.score.unwrap_or_default(),
            term: self.term,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

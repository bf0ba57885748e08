//! 科目成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tbl_grades_subject_grade")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub subject_grade_id: i64,
    pub student_id: i64,
    pub enrollment_id: i64,
    pub course_subject_id: i64,
    pub midterm_grade: Option<f64>,
    pub finals_grade: Option<f64>,
    pub subject_grade: Option<f64>,
    pub remarks: Option<String>,
    pub finalized_by: Option<i64>,
    pub finalized_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grade_inputs::Entity")]
    GradeInputs,
}

impl Related<super::grade_inputs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradeInputs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        use crate::models::grades::entities::Grade;

        Grade {
            subject_grade_id: self.subject_grade_id,
            student_id: self.student_id,
            enrollment_id: self.enrollment_id,
            course_subject_id: self.course_subject_id,
            midterm_grade: self.midterm_grade,
            finals_grade: self.finals_grade,
            subject_grade: self.subject_grade,
            remarks: self.remarks,
            finalized_by: self.finalized_by,
            finalized_at: self.finalized_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

//! 预导入模块，方便使用

pub use super::grade_inputs::{
    ActiveModel as GradeInputActiveModel, Entity as GradeInputs, Model as GradeInputModel,
};
pub use super::subject_grades::{
    ActiveModel as SubjectGradeActiveModel, Entity as SubjectGrades, Model as SubjectGradeModel,
};

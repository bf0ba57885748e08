use serde::Deserialize;

use crate::models::common::deserialize_optional_i64;

// 成绩列表查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_subject_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub enrollment_id: Option<i64>,
}

// 创建成绩请求（未校验）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: Option<i64>,
    pub enrollment_id: Option<i64>,
    pub course_subject_id: Option<i64>,
    pub midterm_grade: Option<f64>,
    pub finals_grade: Option<f64>,
    pub subject_grade: Option<f64>,
    pub remarks: Option<String>,
    pub finalized_by: Option<i64>,
}

// 通过校验的新成绩（用于存储层）
#[derive(Debug, Clone)]
pub struct NewGrade {
    pub student_id: i64,
    pub enrollment_id: i64,
    pub course_subject_id: i64,
    pub midterm_grade: Option<f64>,
    pub finals_grade: Option<f64>,
    pub subject_grade: Option<f64>,
    pub remarks: Option<String>,
    pub finalized_by: Option<i64>,
}

// 更新成绩请求
//
// 未提供的字段与显式 null 一样，都表示保留原值。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGradeRequest {
    pub student_id: Option<i64>,
    pub enrollment_id: Option<i64>,
    pub course_subject_id: Option<i64>,
    pub midterm_grade: Option<f64>,
    pub finals_grade: Option<f64>,
    pub subject_grade: Option<f64>,
    pub remarks: Option<String>,
    pub finalized_by: Option<i64>,
}

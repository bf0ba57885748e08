use serde::Deserialize;

use super::entities::{InputType, Term};
use crate::models::common::{
    deserialize_optional_i64, deserialize_optional_string, deserialize_present,
};

// 成绩构成项列表查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeInputListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub subject_grade_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub term: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub input_type: Option<String>,
}

// 创建成绩构成项请求（未校验）
//
// score 需要区分“缺失”和“null”：缺失会被拒绝，null 会交给数据库处理。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGradeInputRequest {
    pub subject_grade_id: Option<i64>,
    pub input_type: Option<String>,
    pub input_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub score: Option<Option<f64>>,
    pub term: Option<String>,
    pub created_by: Option<i64>,
}

// 通过校验的新成绩构成项（用于存储层）
#[derive(Debug, Clone)]
pub struct NewGradeInput {
    pub subject_grade_id: i64,
    pub input_type: InputType,
    pub input_name: String,
    pub score: Option<f64>,
    pub term: Term,
    pub created_by: Option<i64>,
}

// 更新成绩构成项请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGradeInputRequest {
    pub input_type: Option<String>,
    pub input_name: Option<String>,
    pub score: Option<f64>,
    pub term: Option<String>,
}

// 通过校验的成绩构成项变更（None 表示保留原值）
#[derive(Debug, Clone, Default)]
pub struct GradeInputChanges {
    pub input_type: Option<InputType>,
    pub input_name: Option<String>,
    pub score: Option<f64>,
    pub term: Option<Term>,
}

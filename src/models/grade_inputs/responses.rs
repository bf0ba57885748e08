use sea_orm::FromQueryResult;
use serde::Serialize;

/// 按学期汇总的成绩构成项统计
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct TermInputSummary {
    pub term: String,
    pub input_count: i64,
    pub average_score: Option<f64>,
    pub highest_score: Option<f64>,
    pub lowest_score: Option<f64>,
}

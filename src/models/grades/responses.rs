use sea_orm::FromQueryResult;
use serde::Serialize;

/// 学生成绩统计
///
/// 学生没有任何成绩记录时，计数为 0，平均/最高/最低为 null。
#[derive(Debug, Clone, Default, Serialize, FromQueryResult)]
pub struct StudentGradeStats {
    pub total_subjects: i64,
    pub average_grade: Option<f64>,
    pub highest_grade: Option<f64>,
    pub lowest_grade: Option<f64>,
    pub passed_count: i64,
    pub failed_count: i64,
}

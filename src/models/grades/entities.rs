use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 科目成绩：某学生在某次选课中某门科目的最终成绩
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub subject_grade_id: i64,
    pub student_id: i64,
    pub enrollment_id: i64,
    pub course_subject_id: i64,
    pub midterm_grade: Option<f64>,
    pub finals_grade: Option<f64>,
    // 最终成绩
    pub subject_grade: Option<f64>,
    // 通常为 "Passed" / "Failed"
    pub remarks: Option<String>,
    pub finalized_by: Option<i64>,
    pub finalized_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 成绩构成项：测验、考试、作业等单个评分项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeInput {
    pub grade_input_id: i64,
    pub subject_grade_id: i64,
    pub input_type: String,
    pub input_name: String,
    pub score: f64,
    pub term: String,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 评分项类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Quiz,
    Exam,
    Assignment,
    Project,
    Recitation,
    Attendance,
}

impl InputType {
    pub const ALL: [InputType; 6] = [
        InputType::Quiz,
        InputType::Exam,
        InputType::Assignment,
        InputType::Project,
        InputType::Recitation,
        InputType::Attendance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Quiz => "quiz",
            InputType::Exam => "exam",
            InputType::Assignment => "assignment",
            InputType::Project => "project",
            InputType::Recitation => "recitation",
            InputType::Attendance => "attendance",
        }
    }

    /// 允许值列表，用于错误提示
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Invalid input type: {s}"))
    }
}

/// 评分学期
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Midterms,
    Finals,
}

impl Term {
    pub const ALL: [Term; 2] = [Term::Midterms, Term::Finals];

    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Midterms => "midterms",
            Term::Finals => "finals",
        }
    }

    /// 允许值列表，用于错误提示
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Invalid term: {s}"))
    }
}

pub mod common;
pub mod grade_inputs;
pub mod grades;
pub mod system;

pub use common::*;

/// 程序启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

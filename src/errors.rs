//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及对应的 HTTP 状态码。

use actix_web::http::StatusCode;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - http_status() 方法 - 返回响应状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_grade_api_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:expr)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum GradeApiError {
            $($variant(String),)*
        }

        impl GradeApiError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradeApiError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradeApiError::$variant(_) => $type_name,)*
                }
            }

            /// 获取对应的 HTTP 状态码
            pub fn http_status(&self) -> StatusCode {
                match self {
                    $(GradeApiError::$variant(_) => $status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradeApiError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradeApiError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradeApiError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_grade_api_errors! {
    DatabaseConfig("E001", "Database Configuration Error", StatusCode::INTERNAL_SERVER_ERROR),
    DatabaseConnection("E002", "Database Connection Error", StatusCode::INTERNAL_SERVER_ERROR),
    DatabaseOperation("E003", "Database Operation Error", StatusCode::INTERNAL_SERVER_ERROR),
    Validation("E004", "Validation Error", StatusCode::BAD_REQUEST),
    NotFound("E005", "Resource Not Found", StatusCode::NOT_FOUND),
}

impl GradeApiError {
    /// 是否为存储层故障（连接、约束、SQL 错误等）
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            GradeApiError::DatabaseConfig(_)
                | GradeApiError::DatabaseConnection(_)
                | GradeApiError::DatabaseOperation(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 控制台报告格式：调试构建带颜色
    pub fn format_report(&self) -> String {
        #[cfg(debug_assertions)]
        {
            self.format_colored()
        }
        #[cfg(not(debug_assertions))]
        {
            self.format_simple()
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GradeApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradeApiError {}

impl From<sea_orm::DbErr> for GradeApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        GradeApiError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GradeApiError>;

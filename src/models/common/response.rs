use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::GradeApiError;

// 统一的API响应结构
//
// - 读取：`{success, count?, data}`
// - 写入：`{success, message, data | deleted_id}`
// - 失败：`{success: false, message, error?}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 单条记录或统计结果
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            deleted_id: None,
            error: None,
        }
    }

    /// 写操作成功，附带最新的记录
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
            deleted_id: None,
            error: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// 列表结果，附带条数
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
            deleted_id: None,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn deleted(id: i64, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: None,
            deleted_id: Some(id),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            deleted_id: None,
            error: None,
        }
    }

    pub fn error_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: Some(detail.into()),
            ..Self::error(message)
        }
    }

    /// 根据错误类型构造失败响应
    ///
    /// 校验错误和未找到错误直接使用错误信息作为 message；
    /// 存储层故障使用调用方给出的上下文作为 message，底层信息是否放入
    /// `error` 字段由 `app.expose_error_details` 决定。
    pub fn from_error(context: &str, err: &GradeApiError) -> Self {
        if err.is_store_failure() {
            if AppConfig::get().app.expose_error_details {
                Self::error_with_detail(context, err.message())
            } else {
                Self::error(context)
            }
        } else {
            Self::error(err.message())
        }
    }
}

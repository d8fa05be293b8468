use serde::{Deserialize, Serialize};

use crate::errors::RecordsError;
use crate::models::ErrorCode;

// 统一的响应结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success as i32
    }
}

impl ApiResponse<()> {
    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 转换为任意数据类型的空响应
    pub fn into_empty<T>(self) -> ApiResponse<T> {
        ApiResponse {
            code: self.code,
            message: self.message,
            data: None,
            timestamp: self.timestamp,
        }
    }
}

impl<T> From<&RecordsError> for ApiResponse<T> {
    fn from(err: &RecordsError) -> Self {
        Self {
            code: ErrorCode::from(err) as i32,
            message: err.message().to_string(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

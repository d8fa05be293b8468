//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_records_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum RecordsError {
            $($variant(String),)*
        }

        impl RecordsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RecordsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RecordsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RecordsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RecordsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_records_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    DuplicateEnrollment("E003", "Duplicate Enrollment"),
    Configuration("E004", "Configuration Error"),
    Serialization("E005", "Serialization Error"),
    Io("E006", "I/O Error"),
    StorageState("E007", "Storage State Error"),
}

impl RecordsError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为调用方输入导致的错误（校验失败、资源不存在、重复选课）
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            RecordsError::Validation(_)
                | RecordsError::NotFound(_)
                | RecordsError::DuplicateEnrollment(_)
        )
    }
}

impl fmt::Display for RecordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RecordsError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for RecordsError {
    fn from(err: std::io::Error) -> Self {
        RecordsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RecordsError {
    fn from(err: serde_json::Error) -> Self {
        RecordsError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for RecordsError {
    fn from(err: config::ConfigError) -> Self {
        RecordsError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;

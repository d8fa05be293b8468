use crate::errors::RecordsError;

/// 响应错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    BadRequest = 1000,
    ValidationFailed = 1001,

    // 资源不存在
    NotFound = 2001,

    // 选课冲突
    EnrollmentAlreadyExists = 3001,

    InternalServerError = 5000,
}

impl From<&RecordsError> for ErrorCode {
    fn from(err: &RecordsError) -> Self {
        match err {
            RecordsError::Validation(_) => ErrorCode::ValidationFailed,
            RecordsError::NotFound(_) => ErrorCode::NotFound,
            RecordsError::DuplicateEnrollment(_) => ErrorCode::EnrollmentAlreadyExists,
            RecordsError::Configuration(_)
            | RecordsError::Serialization(_)
            | RecordsError::Io(_)
            | RecordsError::StorageState(_) => ErrorCode::InternalServerError,
        }
    }
}

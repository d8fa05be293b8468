pub mod error_code;
pub mod response;
pub mod selectors;

pub use error_code::ErrorCode;
pub use response::ApiResponse;
pub use selectors::{CourseOption, SelectorsResponse, StudentOption};

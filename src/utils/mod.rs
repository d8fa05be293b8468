pub mod validate;

pub use validate::{normalize_grade, validate_course_code, validate_required};

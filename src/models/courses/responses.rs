use super::entities::Course;
use serde::Serialize;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub total: usize,
    pub items: Vec<Course>,
}

impl From<Vec<Course>> for CourseListResponse {
    fn from(items: Vec<Course>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

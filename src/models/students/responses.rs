use super::entities::Student;
use serde::Serialize;

// 学生列表响应（学生记录表）
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub total: usize,
    pub items: Vec<Student>,
}

impl From<Vec<Student>> for StudentListResponse {
    fn from(items: Vec<Student>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

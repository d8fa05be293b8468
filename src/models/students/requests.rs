use serde::Deserialize;

// 新增学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub major: String,
}

// 学生更新请求，学号不可修改
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub major: String,
}

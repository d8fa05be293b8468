use serde::Deserialize;

// 选课请求
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    pub student_id: i64,
    pub course_code: String,
}

// 成绩录入/修改请求
#[derive(Debug, Clone, Deserialize)]
pub struct AssignGradeRequest {
    pub student_id: i64,
    pub course_code: String,
    pub grade: String,
}

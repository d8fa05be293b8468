use serde::Serialize;

use super::entities::Enrollment;
use crate::models::students::entities::Student;

// 学生选课列表响应
#[derive(Debug, Serialize)]
pub struct EnrollmentListResponse {
    pub student_id: i64,
    pub total: usize,
    pub items: Vec<Enrollment>,
}

/// 成绩表中的一行：课程代码、课程名称、当前成绩
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeSheetRow {
    pub course_code: String,
    pub course_name: String,
    pub grade: String,
}

// 学生成绩表响应
#[derive(Debug, Serialize)]
pub struct GradeSheetResponse {
    pub student: Student,
    pub items: Vec<GradeSheetRow>,
}

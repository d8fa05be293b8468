//! 请求分发层
//!
//! 每行一个 JSON 请求，按 `op` 字段分发到对应服务，结果统一包装为 [`ApiResponse`]。

pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod students;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    enrollments::requests::{AssignGradeRequest, EnrollRequest},
    students::requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::services::RecordServices;

pub type Response = ApiResponse<serde_json::Value>;

/// 表现层发来的请求
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    ListStudents,
    GetStudent { id: i64 },
    AddStudent(CreateStudentRequest),
    UpdateStudent {
        id: i64,
        #[serde(flatten)]
        req: UpdateStudentRequest,
    },
    ListCourses,
    Enroll(EnrollRequest),
    ListEnrollments { student_id: i64 },
    GradeSheet { student_id: i64 },
    AssignGrade(AssignGradeRequest),
    Selectors,
}

pub fn dispatch(services: &RecordServices, request: Request) -> Response {
    debug!("Dispatching request: {:?}", request);

    match request {
        Request::ListStudents => students::list_students(services),
        Request::GetStudent { id } => students::get_student(services, id),
        Request::AddStudent(req) => students::add_student(services, req),
        Request::UpdateStudent { id, req } => students::update_student(services, id, req),
        Request::ListCourses => courses::list_courses(services),
        Request::Selectors => courses::selectors(services),
        Request::Enroll(req) => enrollments::enroll(services, req),
        Request::ListEnrollments { student_id } => {
            enrollments::list_enrollments(services, student_id)
        }
        Request::GradeSheet { student_id } => grades::grade_sheet(services, student_id),
        Request::AssignGrade(req) => grades::assign_grade(services, req),
    }
}

/// 处理一行输入，空行返回 None
pub fn handle_line(services: &RecordServices, line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(services, request),
        Err(e) => {
            warn!("Malformed request line: {}", e);
            ApiResponse::error_empty(ErrorCode::BadRequest, format!("Invalid request: {e}"))
                .into_empty()
        }
    };

    Some(response)
}

/// 将服务结果转换为响应
pub(crate) fn respond<T: Serialize>(result: Result<T>, message: &str) -> Response {
    match result.and_then(|data| Ok(serde_json::to_value(data)?)) {
        Ok(value) => ApiResponse::success(value, message),
        Err(e) => {
            if !e.is_caller_error() {
                tracing::error!("Request failed: {}", e);
            }
            ApiResponse::from(&e)
        }
    }
}

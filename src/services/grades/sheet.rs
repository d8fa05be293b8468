use tracing::debug;

use super::GradeService;
use crate::errors::{RecordsError, Result};
use crate::models::enrollments::responses::{GradeSheetResponse, GradeSheetRow};

/// 学生成绩表：课程代码、课程名称、当前成绩
///
/// 课程名称在读取时通过课程目录解析。
pub fn grade_sheet(service: &GradeService, student_id: i64) -> Result<GradeSheetResponse> {
    let storage = service.get_storage();

    let student = storage
        .get_student_by_id(student_id)?
        .ok_or_else(|| RecordsError::not_found(format!("Student {student_id} not found")))?;

    let mut items = Vec::new();
    for enrollment in storage.list_enrollments_by_student(student_id)? {
        let course_name = storage
            .get_course_by_code(enrollment.course_code())?
            .map(|course| course.name().to_string())
            .unwrap_or_default();
        items.push(GradeSheetRow {
            course_code: enrollment.course_code().to_string(),
            course_name,
            grade: enrollment.grade().to_string(),
        });
    }

    debug!(
        "Built grade sheet with {} row(s) for student {}",
        items.len(),
        student_id
    );

    Ok(GradeSheetResponse { student, items })
}

use tracing::debug;

use super::EnrollmentService;
use crate::errors::Result;
use crate::models::enrollments::responses::EnrollmentListResponse;

/// 未知学号返回空列表
pub fn enrollments_for_student(
    service: &EnrollmentService,
    student_id: i64,
) -> Result<EnrollmentListResponse> {
    let items = service
        .get_storage()
        .list_enrollments_by_student(student_id)?;
    debug!(
        "Found {} enrollment(s) for student {}",
        items.len(),
        student_id
    );

    Ok(EnrollmentListResponse {
        student_id,
        total: items.len(),
        items,
    })
}

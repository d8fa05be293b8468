use tracing::{info, warn};

use super::EnrollmentService;
use crate::errors::Result;
use crate::models::enrollments::{entities::Enrollment, requests::EnrollRequest};

pub fn enroll(service: &EnrollmentService, req: EnrollRequest) -> Result<Enrollment> {
    // 学生、课程存在性与重复选课由存储层在同一次加锁内检查
    match service
        .get_storage()
        .create_enrollment(req.student_id, &req.course_code)
    {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in {} successfully",
                enrollment.student_id(),
                enrollment.course_code()
            );
            Ok(enrollment)
        }
        Err(e) => {
            warn!(
                "Enrollment of student {} in {} failed: {}",
                req.student_id, req.course_code, e
            );
            Err(e)
        }
    }
}

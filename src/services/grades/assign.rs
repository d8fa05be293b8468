use tracing::{info, warn};

use super::GradeService;
use crate::errors::{RecordsError, Result};
use crate::models::enrollments::{entities::Enrollment, requests::AssignGradeRequest};
use crate::utils::validate::normalize_grade;

pub fn assign_grade(service: &GradeService, req: AssignGradeRequest) -> Result<Enrollment> {
    let storage = service.get_storage();
    let not_found = || {
        RecordsError::not_found(format!(
            "Student {} is not enrolled in {}",
            req.student_id, req.course_code
        ))
    };

    // 先确认选课记录存在，再校验成绩
    if storage
        .get_enrollment(req.student_id, &req.course_code)?
        .is_none()
    {
        warn!(
            "Grade rejected, no enrollment for student {} in {}",
            req.student_id, req.course_code
        );
        return Err(not_found());
    }

    let Some(grade) = normalize_grade(&req.grade) else {
        warn!(
            "Grade rejected for student {} in {}: blank grade",
            req.student_id, req.course_code
        );
        return Err(RecordsError::validation("Grade cannot be empty"));
    };

    let enrollment = storage
        .update_enrollment_grade(req.student_id, &req.course_code, &grade)?
        .ok_or_else(not_found)?;

    info!(
        "Grade {} assigned to student {} in {}",
        enrollment.grade(),
        enrollment.student_id(),
        enrollment.course_code()
    );
    Ok(enrollment)
}

#[cfg(test)]
mod tests {
    use crate::errors::RecordsError;
    use crate::models::enrollments::requests::AssignGradeRequest;
    use crate::services::test_support::seeded_services;

    fn request(student_id: i64, course_code: &str, grade: &str) -> AssignGradeRequest {
        AssignGradeRequest {
            student_id,
            course_code: course_code.to_string(),
            grade: grade.to_string(),
        }
    }

    #[test]
    fn test_assign_grade_upper_cases() {
        let services = seeded_services();
        let enrollment = services
            .grades
            .assign_grade(request(100, "CS101", "a-"))
            .unwrap();
        assert_eq!(enrollment.grade(), "A-");
    }

    #[test]
    fn test_assign_grade_trims() {
        let services = seeded_services();
        let enrollment = services
            .grades
            .assign_grade(request(100, "CS101", "  b+  "))
            .unwrap();
        assert_eq!(enrollment.grade(), "B+");
    }

    #[test]
    fn test_assign_grade_is_idempotent() {
        let services = seeded_services();
        let first = services
            .grades
            .assign_grade(request(100, "CS101", "b"))
            .unwrap();
        let second = services
            .grades
            .assign_grade(request(100, "CS101", "b"))
            .unwrap();
        assert_eq!(first, second);

        let list = services.enrollments.enrollments_for_student(100).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.items[0].grade(), "B");
    }

    #[test]
    fn test_assign_grade_rejects_blank() {
        let services = seeded_services();
        let err = services
            .grades
            .assign_grade(request(100, "CS101", "   "))
            .unwrap_err();
        assert!(matches!(err, RecordsError::Validation(_)));

        let list = services.enrollments.enrollments_for_student(100).unwrap();
        assert_eq!(list.items[0].grade(), "92");
    }

    #[test]
    fn test_assign_grade_accepts_non_breaking_space() {
        let services = seeded_services();
        let enrollment = services
            .grades
            .assign_grade(request(100, "CS101", "\u{00A0}"))
            .unwrap();
        assert_eq!(enrollment.grade(), "\u{00A0}");
    }

    #[test]
    fn test_assign_grade_without_enrollment() {
        let services = seeded_services();
        let err = services
            .grades
            .assign_grade(request(101, "CS101", "A"))
            .unwrap_err();
        assert!(matches!(err, RecordsError::NotFound(_)));
    }

    #[test]
    fn test_missing_enrollment_reported_before_blank_grade() {
        let services = seeded_services();
        let err = services
            .grades
            .assign_grade(request(101, "CS101", ""))
            .unwrap_err();
        assert!(matches!(err, RecordsError::NotFound(_)));
    }
}

use super::{Response, respond};
use crate::models::enrollments::requests::EnrollRequest;
use crate::services::RecordServices;

pub fn enroll(services: &RecordServices, req: EnrollRequest) -> Response {
    respond(
        services.enrollments.enroll(req),
        "Student enrolled successfully",
    )
}

pub fn list_enrollments(services: &RecordServices, student_id: i64) -> Response {
    respond(
        services.enrollments.enrollments_for_student(student_id),
        "Enrollment list retrieved successfully",
    )
}

use super::{Response, respond};
use crate::models::enrollments::requests::AssignGradeRequest;
use crate::services::RecordServices;

pub fn assign_grade(services: &RecordServices, req: AssignGradeRequest) -> Response {
    respond(
        services.grades.assign_grade(req),
        "Grade assigned successfully",
    )
}

pub fn grade_sheet(services: &RecordServices, student_id: i64) -> Response {
    respond(
        services.grades.grade_sheet(student_id),
        "Grade sheet retrieved successfully",
    )
}

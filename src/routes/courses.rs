use super::{Response, respond};
use crate::services::RecordServices;

pub fn list_courses(services: &RecordServices) -> Response {
    respond(
        services.courses.list_courses(),
        "Course list retrieved successfully",
    )
}

pub fn selectors(services: &RecordServices) -> Response {
    respond(
        services.courses.selectors(),
        "Selectors retrieved successfully",
    )
}

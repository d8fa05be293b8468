use super::{Response, respond};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::services::RecordServices;

pub fn list_students(services: &RecordServices) -> Response {
    respond(
        services.students.list_students(),
        "Student list retrieved successfully",
    )
}

pub fn get_student(services: &RecordServices, id: i64) -> Response {
    respond(
        services.students.get_student(id),
        "Student retrieved successfully",
    )
}

pub fn add_student(services: &RecordServices, req: CreateStudentRequest) -> Response {
    respond(
        services.students.add_student(req),
        "Student added successfully",
    )
}

pub fn update_student(services: &RecordServices, id: i64, req: UpdateStudentRequest) -> Response {
    respond(
        services.students.update_student(id, req),
        "Student updated successfully",
    )
}

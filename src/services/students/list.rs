use tracing::debug;

use super::StudentService;
use crate::errors::{RecordsError, Result};
use crate::models::students::{entities::Student, responses::StudentListResponse};

pub fn list_students(service: &StudentService) -> Result<StudentListResponse> {
    let students = service.get_storage().list_students()?;
    debug!("Listed {} student(s)", students.len());
    Ok(students.into())
}

pub fn get_student(service: &StudentService, id: i64) -> Result<Student> {
    service
        .get_storage()
        .get_student_by_id(id)?
        .ok_or_else(|| RecordsError::not_found(format!("Student {id} not found")))
}

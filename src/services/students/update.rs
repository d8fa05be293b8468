use tracing::{info, warn};

use super::StudentService;
use crate::errors::{RecordsError, Result};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};

pub fn update_student(
    service: &StudentService,
    id: i64,
    req: UpdateStudentRequest,
) -> Result<Student> {
    match service.get_storage().update_student(id, req)? {
        Some(student) => {
            info!("Student {} updated (ID: {})", student.name(), student.id());
            Ok(student)
        }
        None => {
            warn!("Update rejected, student {} not found", id);
            Err(RecordsError::not_found(format!("Student {id} not found")))
        }
    }
}

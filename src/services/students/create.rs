use tracing::{info, warn};

use super::StudentService;
use crate::errors::{RecordsError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::utils::validate::validate_required;

pub fn add_student(service: &StudentService, req: CreateStudentRequest) -> Result<Student> {
    // 姓名与专业均为必填
    if let Err(msg) = validate_required("Name", &req.name)
        .and_then(|_| validate_required("Major", &req.major))
    {
        warn!("Rejected new student: {}", msg);
        return Err(RecordsError::validation(msg));
    }

    let student = service.get_storage().create_student(req)?;
    info!("Student {} added with ID: {}", student.name(), student.id());

    Ok(student)
}

#[cfg(test)]
mod tests {
    use crate::errors::RecordsError;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::services::test_support::seeded_services;

    fn request(name: &str, major: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            major: major.to_string(),
        }
    }

    #[test]
    fn test_add_student_assigns_greater_id() {
        let services = seeded_services();
        for (name, major) in [("Carol White", "PH"), ("Dan Brown", "CS"), ("Eve Black", "MA")] {
            let existing_max = services
                .students
                .list_students()
                .unwrap()
                .items
                .iter()
                .map(|s| s.id())
                .max()
                .unwrap();
            let student = services.students.add_student(request(name, major)).unwrap();
            assert!(student.id() > existing_max);
            assert_eq!(student.name(), name);
            assert_eq!(student.major(), major);
        }
    }

    #[test]
    fn test_add_student_appends_in_order() {
        let services = seeded_services();
        let student = services
            .students
            .add_student(request("Carol White", "PH"))
            .unwrap();
        assert_eq!(student.id(), 102);

        let list = services.students.list_students().unwrap();
        assert_eq!(list.total, 3);
        assert_eq!(list.items.last(), Some(&student));
    }

    #[test]
    fn test_add_student_rejects_empty_fields() {
        let services = seeded_services();

        let err = services.students.add_student(request("", "CS")).unwrap_err();
        assert!(matches!(err, RecordsError::Validation(_)));

        let err = services.students.add_student(request("Bob", "")).unwrap_err();
        assert!(matches!(err, RecordsError::Validation(_)));

        assert_eq!(services.students.list_students().unwrap().total, 2);
    }
}

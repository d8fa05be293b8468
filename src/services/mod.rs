pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod students;

pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use students::StudentService;

use std::sync::Arc;

use crate::storage::Storage;

/// 表现层使用的全部服务，共享同一个存储实例
pub struct RecordServices {
    pub storage: Arc<dyn Storage>,
    pub students: StudentService,
    pub courses: CourseService,
    pub enrollments: EnrollmentService,
    pub grades: GradeService,
}

impl RecordServices {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            students: StudentService::new(storage.clone()),
            courses: CourseService::new(storage.clone()),
            enrollments: EnrollmentService::new(storage.clone()),
            grades: GradeService::new(storage.clone()),
            storage,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use super::RecordServices;
    use crate::config::RecordsConfig;
    use crate::storage::MemoryStorage;

    /// 演示数据：学生 100、101，课程 CS101、MA101、PH105，选课 (100, CS101, "92")
    pub(crate) fn seeded_services() -> RecordServices {
        let storage = MemoryStorage::with_demo_data(RecordsConfig::default())
            .expect("seeding an empty storage cannot fail");
        RecordServices::new(Arc::new(storage))
    }

    pub(crate) fn empty_services() -> RecordServices {
        RecordServices::new(Arc::new(MemoryStorage::default()))
    }
}

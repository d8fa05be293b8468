//! 演示数据

use super::{MemoryStorage, RecordTables};
use crate::config::RecordsConfig;
use crate::errors::Result;
use crate::models::{enrollments::entities::Enrollment, students::entities::Student};
use tracing::info;

impl MemoryStorage {
    /// 创建包含演示学生与选课记录的存储实例
    pub fn with_demo_data(config: RecordsConfig) -> Result<Self> {
        let storage = Self::new(config);
        {
            let mut tables = storage.write()?;
            seed_demo_records(&mut tables);
            info!(
                "Seeded {} student(s) and {} enrollment(s)",
                tables.students.len(),
                tables.enrollments.len()
            );
        }
        Ok(storage)
    }
}

fn seed_demo_records(tables: &mut RecordTables) {
    tables.students.push(Student::new(100, "Alice Smith", "CS"));
    tables.students.push(Student::new(101, "Bob Johnson", "MA"));

    // 课程目录可由配置替换，演示选课仅在 CS101 存在时写入
    if tables.courses.iter().any(|c| c.code() == "CS101") {
        tables.enrollments.push(Enrollment::new(100, "CS101", "92"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::Course;
    use crate::storage::Storage;

    #[test]
    fn test_demo_data() {
        let storage = MemoryStorage::with_demo_data(RecordsConfig::default()).unwrap();

        let students = storage.list_students().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0], Student::new(100, "Alice Smith", "CS"));
        assert_eq!(students[1], Student::new(101, "Bob Johnson", "MA"));

        assert_eq!(storage.list_courses().unwrap().len(), 3);
        assert_eq!(
            storage.list_enrollments_by_student(100).unwrap(),
            vec![Enrollment::new(100, "CS101", "92")]
        );
    }

    #[test]
    fn test_demo_enrollment_skipped_without_cs101() {
        let config = RecordsConfig {
            courses: vec![Course::new("BIO200", "Cell Biology")],
            ..Default::default()
        };
        let storage = MemoryStorage::with_demo_data(config).unwrap();
        assert_eq!(storage.list_students().unwrap().len(), 2);
        assert_eq!(storage.count_enrollments().unwrap(), 0);
    }
}

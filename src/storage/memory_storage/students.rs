//! 学生存储操作

use super::MemoryStorage;
use crate::errors::{RecordsError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};

impl MemoryStorage {
    /// 创建学生
    pub fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let mut tables = self.write()?;

        // 新学号 = 现有最大学号 + 1，集合为空时使用配置的起始学号
        let id = match tables.students.iter().map(Student::id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| RecordsError::storage_state("学号已达上限，无法分配新学号"))?,
            None => self.config.first_student_id,
        };

        let student = Student::new(id, req.name, req.major);
        tables.students.push(student.clone());

        Ok(student)
    }

    /// 通过学号获取学生
    pub fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let tables = self.read()?;
        Ok(tables.students.iter().find(|s| s.id() == id).cloned())
    }

    /// 更新学生信息，学号保持不变
    pub fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let mut tables = self.write()?;

        let Some(student) = tables.students.iter_mut().find(|s| s.id() == id) else {
            return Ok(None);
        };

        student.set_name(update.name);
        student.set_major(update.major);

        Ok(Some(student.clone()))
    }

    /// 按插入顺序列出学生
    pub fn list_students_impl(&self) -> Result<Vec<Student>> {
        let tables = self.read()?;
        Ok(tables.students.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RecordsConfig;
    use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
    use crate::storage::MemoryStorage;

    fn create(storage: &MemoryStorage, name: &str, major: &str) -> i64 {
        storage
            .create_student_impl(CreateStudentRequest {
                name: name.to_string(),
                major: major.to_string(),
            })
            .unwrap()
            .id()
    }

    #[test]
    fn test_first_id_on_empty_storage() {
        let storage = MemoryStorage::default();
        assert_eq!(create(&storage, "Carol", "PH"), 101);
        assert_eq!(create(&storage, "Dave", "CS"), 102);
    }

    #[test]
    fn test_first_id_follows_config() {
        let storage = MemoryStorage::new(RecordsConfig {
            first_student_id: 5000,
            ..Default::default()
        });
        assert_eq!(create(&storage, "Carol", "PH"), 5000);
    }

    #[test]
    fn test_next_id_after_seed() {
        let storage = MemoryStorage::with_demo_data(RecordsConfig::default()).unwrap();
        assert_eq!(create(&storage, "Carol", "PH"), 102);
    }

    #[test]
    fn test_update_missing_student() {
        let storage = MemoryStorage::default();
        let updated = storage
            .update_student_impl(
                42,
                UpdateStudentRequest {
                    name: "Nobody".to_string(),
                    major: "XX".to_string(),
                },
            )
            .unwrap();
        assert!(updated.is_none());
        assert!(storage.list_students_impl().unwrap().is_empty());
    }
}

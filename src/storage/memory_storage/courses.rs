//! 课程目录存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::courses::entities::Course;

impl MemoryStorage {
    /// 通过课程代码获取课程
    pub fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let tables = self.read()?;
        Ok(tables.courses.iter().find(|c| c.code() == code).cloned())
    }

    /// 列出全部课程
    pub fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let tables = self.read()?;
        Ok(tables.courses.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStorage;

    #[test]
    fn test_get_course_by_code_is_exact() {
        let storage = MemoryStorage::default();
        let course = storage.get_course_by_code_impl("MA101").unwrap().unwrap();
        assert_eq!(course.name(), "Basic Math");

        assert!(storage.get_course_by_code_impl("ma101").unwrap().is_none());
        assert!(storage.get_course_by_code_impl("BI200").unwrap().is_none());
    }

    #[test]
    fn test_list_courses_keeps_catalogue_order() {
        let storage = MemoryStorage::default();
        let codes: Vec<String> = storage
            .list_courses_impl()
            .unwrap()
            .iter()
            .map(|c| c.code().to_string())
            .collect();
        assert_eq!(codes, vec!["CS101", "MA101", "PH105"]);
    }
}

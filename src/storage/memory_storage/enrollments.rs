//! 选课与成绩存储操作

use super::MemoryStorage;
use crate::errors::{RecordsError, Result};
use crate::models::enrollments::entities::Enrollment;

impl MemoryStorage {
    /// 创建选课记录
    ///
    /// 存在性检查、重复检查与追加在同一把写锁内完成。
    pub fn create_enrollment_impl(&self, student_id: i64, course_code: &str) -> Result<Enrollment> {
        let mut tables = self.write()?;

        if !tables.students.iter().any(|s| s.id() == student_id) {
            return Err(RecordsError::not_found(format!(
                "Student {student_id} not found"
            )));
        }
        if !tables.courses.iter().any(|c| c.code() == course_code) {
            return Err(RecordsError::not_found(format!(
                "Course {course_code} not found"
            )));
        }
        if tables
            .enrollments
            .iter()
            .any(|e| e.matches(student_id, course_code))
        {
            return Err(RecordsError::duplicate_enrollment(format!(
                "Student {student_id} is already enrolled in {course_code}"
            )));
        }

        let enrollment = Enrollment::new(student_id, course_code, &self.config.default_grade);
        tables.enrollments.push(enrollment.clone());

        Ok(enrollment)
    }

    /// 获取某学生某课程的选课记录
    pub fn get_enrollment_impl(
        &self,
        student_id: i64,
        course_code: &str,
    ) -> Result<Option<Enrollment>> {
        let tables = self.read()?;
        Ok(tables
            .enrollments
            .iter()
            .find(|e| e.matches(student_id, course_code))
            .cloned())
    }

    /// 按插入顺序列出学生的选课记录
    pub fn list_enrollments_by_student_impl(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        let tables = self.read()?;
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| e.student_id() == student_id)
            .cloned()
            .collect())
    }

    /// 覆盖成绩，成绩的规范化由服务层负责
    pub fn update_enrollment_grade_impl(
        &self,
        student_id: i64,
        course_code: &str,
        grade: &str,
    ) -> Result<Option<Enrollment>> {
        let mut tables = self.write()?;

        let Some(enrollment) = tables
            .enrollments
            .iter_mut()
            .find(|e| e.matches(student_id, course_code))
        else {
            return Ok(None);
        };

        enrollment.set_grade(grade);
        Ok(Some(enrollment.clone()))
    }

    /// 选课记录总数
    pub fn count_enrollments_impl(&self) -> Result<usize> {
        let tables = self.read()?;
        Ok(tables.enrollments.len())
    }
}

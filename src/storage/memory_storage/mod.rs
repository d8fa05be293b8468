//! 内存存储实现
//!
//! 三个有序集合（学生、课程、选课）共用一把读写锁，每个操作只加锁一次。

mod courses;
mod enrollments;
mod seed;
mod students;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::RecordsConfig;
use crate::errors::{RecordsError, Result};
use crate::models::{
    courses::entities::Course, enrollments::entities::Enrollment, students::entities::Student,
};
use tracing::debug;

/// 存储中的全部记录
#[derive(Debug, Default)]
pub(crate) struct RecordTables {
    pub(crate) students: Vec<Student>,
    pub(crate) courses: Vec<Course>,
    pub(crate) enrollments: Vec<Enrollment>,
}

/// 内存存储实现
#[derive(Debug)]
pub struct MemoryStorage {
    tables: RwLock<RecordTables>,
    config: RecordsConfig,
}

impl MemoryStorage {
    /// 创建只包含课程目录的存储实例
    pub fn new(config: RecordsConfig) -> Self {
        let tables = RecordTables {
            courses: config.courses.clone(),
            ..Default::default()
        };

        debug!(
            "MemoryStorage initialized with {} course(s)",
            tables.courses.len()
        );

        Self {
            tables: RwLock::new(tables),
            config,
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, RecordTables>> {
        self.tables
            .read()
            .map_err(|_| RecordsError::storage_state("记录表读锁已失效"))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, RecordTables>> {
        self.tables
            .write()
            .map_err(|_| RecordsError::storage_state("记录表写锁已失效"))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(RecordsConfig::default())
    }
}

// Storage trait 实现
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::storage::Storage;

impl Storage for MemoryStorage {
    // 学生模块
    fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student)
    }

    fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id)
    }

    fn update_student(&self, id: i64, update: UpdateStudentRequest) -> Result<Option<Student>> {
        self.update_student_impl(id, update)
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl()
    }

    // 课程模块
    fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code)
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl()
    }

    // 选课模块
    fn create_enrollment(&self, student_id: i64, course_code: &str) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, course_code)
    }

    fn get_enrollment(&self, student_id: i64, course_code: &str) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, course_code)
    }

    fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_student_impl(student_id)
    }

    fn update_enrollment_grade(
        &self,
        student_id: i64,
        course_code: &str,
        grade: &str,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_grade_impl(student_id, course_code, grade)
    }

    fn count_enrollments(&self) -> Result<usize> {
        self.count_enrollments_impl()
    }
}

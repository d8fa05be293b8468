use std::sync::Arc;

use crate::config::RecordsConfig;
use crate::models::{
    courses::entities::Course,
    enrollments::entities::Enrollment,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};

use crate::errors::Result;

pub mod memory_storage;

pub use memory_storage::MemoryStorage;

pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生，学号由存储层分配
    fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过学号获取学生信息
    fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 更新学生姓名与专业
    fn update_student(&self, id: i64, update: UpdateStudentRequest) -> Result<Option<Student>>;
    // 按插入顺序列出学生
    fn list_students(&self) -> Result<Vec<Student>>;

    /// 课程目录方法
    // 通过课程代码获取课程
    fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出全部课程
    fn list_courses(&self) -> Result<Vec<Course>>;

    /// 选课与成绩方法
    // 创建选课记录，学生或课程不存在、重复选课时返回错误
    fn create_enrollment(&self, student_id: i64, course_code: &str) -> Result<Enrollment>;
    // 获取某学生某课程的选课记录
    fn get_enrollment(&self, student_id: i64, course_code: &str) -> Result<Option<Enrollment>>;
    // 按插入顺序列出学生的选课记录
    fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>>;
    // 覆盖成绩
    fn update_enrollment_grade(
        &self,
        student_id: i64,
        course_code: &str,
        grade: &str,
    ) -> Result<Option<Enrollment>>;
    // 选课记录总数
    fn count_enrollments(&self) -> Result<usize>;
}

pub fn create_storage(config: &RecordsConfig) -> Result<Arc<dyn Storage>> {
    let storage = if config.seed_demo_data {
        MemoryStorage::with_demo_data(config.clone())?
    } else {
        MemoryStorage::new(config.clone())
    };
    Ok(Arc::new(storage))
}

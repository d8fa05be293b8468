pub mod create;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
    responses::StudentListResponse,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 新增学生
    pub fn add_student(&self, req: CreateStudentRequest) -> Result<Student> {
        create::add_student(self, req)
    }

    // 更新学生信息
    pub fn update_student(&self, id: i64, req: UpdateStudentRequest) -> Result<Student> {
        update::update_student(self, id, req)
    }

    // 获取单个学生
    pub fn get_student(&self, id: i64) -> Result<Student> {
        list::get_student(self, id)
    }

    // 学生记录表
    pub fn list_students(&self) -> Result<StudentListResponse> {
        list::list_students(self)
    }
}

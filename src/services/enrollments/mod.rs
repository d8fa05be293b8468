pub mod enroll;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::enrollments::{
    entities::Enrollment, requests::EnrollRequest, responses::EnrollmentListResponse,
};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 学生选课
    pub fn enroll(&self, req: EnrollRequest) -> Result<Enrollment> {
        enroll::enroll(self, req)
    }

    // 列出学生的选课记录
    pub fn enrollments_for_student(&self, student_id: i64) -> Result<EnrollmentListResponse> {
        list::enrollments_for_student(self, student_id)
    }
}

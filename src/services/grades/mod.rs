pub mod assign;
pub mod sheet;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::enrollments::{
    entities::Enrollment, requests::AssignGradeRequest, responses::GradeSheetResponse,
};
use crate::storage::Storage;

pub struct GradeService {
    storage: Arc<dyn Storage>,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 录入/修改成绩
    pub fn assign_grade(&self, req: AssignGradeRequest) -> Result<Enrollment> {
        assign::assign_grade(self, req)
    }

    // 学生成绩表
    pub fn grade_sheet(&self, student_id: i64) -> Result<GradeSheetResponse> {
        sheet::grade_sheet(self, student_id)
    }
}

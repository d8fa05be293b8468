pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{common::SelectorsResponse, courses::responses::CourseListResponse};
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 课程目录
    pub fn list_courses(&self) -> Result<CourseListResponse> {
        list::list_courses(self)
    }

    // 学生与课程下拉选项
    pub fn selectors(&self) -> Result<SelectorsResponse> {
        list::selectors(self)
    }
}

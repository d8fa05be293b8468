use tracing::debug;

use super::CourseService;
use crate::errors::Result;
use crate::models::{
    common::{CourseOption, SelectorsResponse, StudentOption},
    courses::responses::CourseListResponse,
};

pub fn list_courses(service: &CourseService) -> Result<CourseListResponse> {
    let courses = service.get_storage().list_courses()?;
    debug!("Listed {} course(s)", courses.len());
    Ok(courses.into())
}

/// 选课页与成绩页的下拉选项，每次调用都重新读取
pub fn selectors(service: &CourseService) -> Result<SelectorsResponse> {
    let storage = service.get_storage();
    let students = storage.list_students()?;
    let courses = storage.list_courses()?;

    Ok(SelectorsResponse {
        students: students.iter().map(StudentOption::from).collect(),
        courses: courses.iter().map(CourseOption::from).collect(),
    })
}

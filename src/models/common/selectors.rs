use serde::Serialize;

use crate::models::{courses::entities::Course, students::entities::Student};

// 学生下拉选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentOption {
    pub id: i64,
    pub label: String,
}

impl From<&Student> for StudentOption {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id(),
            label: student.to_string(),
        }
    }
}

// 课程下拉选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOption {
    pub code: String,
    pub label: String,
}

impl From<&Course> for CourseOption {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code().to_string(),
            label: course.to_string(),
        }
    }
}

/// 选课与成绩页面使用的全部下拉选项
#[derive(Debug, Serialize)]
pub struct SelectorsResponse {
    pub students: Vec<StudentOption>,
    pub courses: Vec<CourseOption>,
}

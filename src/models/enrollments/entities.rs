use serde::{Deserialize, Serialize};

/// 选课记录
///
/// 仅保存学生学号与课程代码，显示名称在读取时通过存储层解析。
/// 同一 (student_id, course_code) 组合至多存在一条记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    student_id: i64,
    course_code: String,
    grade: String,
}

impl Enrollment {
    pub fn new(student_id: i64, course_code: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            student_id,
            course_code: course_code.into(),
            grade: grade.into(),
        }
    }

    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn set_grade(&mut self, grade: impl Into<String>) {
        self.grade = grade.into();
    }

    /// 是否属于指定的学生与课程
    pub fn matches(&self, student_id: i64, course_code: &str) -> bool {
        self.student_id == student_id && self.course_code == course_code
    }
}

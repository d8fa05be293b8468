use serde::{Deserialize, Serialize};

// 学生实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    // 学号，由存储层分配，创建后不可修改
    id: i64,
    // 姓名
    name: String,
    // 专业
    major: String,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            major: major.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_major(&mut self, major: impl Into<String>) {
        self.major = major.into();
    }
}

// 下拉选择框中显示的文本
impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutators_keep_id() {
        let mut student = Student::new(100, "Alice Smith", "CS");
        student.set_name("Alice Jones");
        student.set_major("PH");
        assert_eq!(student.id(), 100);
        assert_eq!(student.name(), "Alice Jones");
        assert_eq!(student.major(), "PH");
    }

    #[test]
    fn test_display_label() {
        let student = Student::new(101, "Bob Johnson", "MA");
        assert_eq!(student.to_string(), "101 - Bob Johnson");
    }
}

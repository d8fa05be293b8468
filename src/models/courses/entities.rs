use serde::{Deserialize, Serialize};

/// 课程实体，代码与名称均不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    name: String,
}

impl Course {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let course = Course::new("CS101", "Intro to Code");
        assert_eq!(course.to_string(), "CS101 - Intro to Code");
        assert_eq!(course.code(), "CS101");
        assert_eq!(course.name(), "Intro to Code");
    }
}

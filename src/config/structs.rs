use serde::{Deserialize, Serialize};

use crate::models::courses::entities::Course;

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub records: RecordsConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 记录存储配置
///
/// `default_grade` 默认为 `"N/A"`，`first_student_id` 默认为 `101`。
/// 修改这两项会改变新选课的初始成绩和空集合的首个学号，与标准行为不同，仅供演示或测试使用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsConfig {
    pub seed_demo_data: bool,  // 启动时是否载入演示学生与选课
    pub default_grade: String, // 新选课记录的默认成绩
    pub first_student_id: i64, // 学生集合为空时分配的第一个学号
    #[serde(default = "default_courses")]
    pub courses: Vec<Course>, // 课程目录，运行期间不可修改
}

fn default_courses() -> Vec<Course> {
    vec![
        Course::new("CS101", "Intro to Code"),
        Course::new("MA101", "Basic Math"),
        Course::new("PH105", "Philosophy"),
    ]
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            default_grade: "N/A".to_string(),
            first_student_id: 101,
            courses: default_courses(),
        }
    }
}

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::collections::HashSet;
use std::sync::OnceLock;

use super::AppConfig;
use crate::utils::validate::validate_course_code;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 内置默认值，保证所有配置文件都是可选的
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.system_name", "Student Records")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("records.seed_demo_data", true)?
            .set_default("records.default_grade", "N/A")?
            .set_default("records.first_student_id", 101_i64)
    }

    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("STUDENT_RECORDS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// 仅使用内置默认值构建配置
    pub fn from_defaults() -> Result<Self, ConfigError> {
        let app_config: AppConfig = Self::defaults()?.build()?.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.records.default_grade.trim().is_empty() {
            return Err(ConfigError::Message(
                "records.default_grade cannot be empty".to_string(),
            ));
        }
        if self.records.first_student_id <= 0 {
            return Err(ConfigError::Message(format!(
                "records.first_student_id must be positive, got {}",
                self.records.first_student_id
            )));
        }
        if self.records.courses.is_empty() {
            return Err(ConfigError::Message(
                "records.courses must contain at least one course".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for course in &self.records.courses {
            validate_course_code(course.code()).map_err(|e| {
                ConfigError::Message(format!("Invalid course code '{}': {e}", course.code()))
            })?;
            if course.name().trim().is_empty() {
                return Err(ConfigError::Message(format!(
                    "Course '{}' has an empty name",
                    course.code()
                )));
            }
            if !seen.insert(course.code()) {
                return Err(ConfigError::Message(format!(
                    "Duplicate course code in catalogue: {}",
                    course.code()
                )));
            }
        }
        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecordsConfig;
    use crate::models::courses::entities::Course;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_defaults().unwrap();
        assert_eq!(config.app.system_name, "Student Records");
        assert_eq!(config.app.log_level, "info");
        assert!(config.is_development());
        assert_eq!(config.records, RecordsConfig::default());
        assert_eq!(config.records.default_grade, "N/A");
        assert_eq!(config.records.first_student_id, 101);
    }

    #[test]
    fn test_validate_rejects_blank_default_grade() {
        let mut config = AppConfig::from_defaults().unwrap();
        config.records.default_grade = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_first_id() {
        let mut config = AppConfig::from_defaults().unwrap();
        config.records.first_student_id = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_catalogue() {
        let config = AppConfig::from_defaults().unwrap();
        let codes: Vec<&str> = config.records.courses.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["CS101", "MA101", "PH105"]);
    }

    #[test]
    fn test_validate_rejects_duplicate_course_codes() {
        let mut config = AppConfig::from_defaults().unwrap();
        config
            .records
            .courses
            .push(Course::new("CS101", "Intro to Code Again"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_course_code() {
        let mut config = AppConfig::from_defaults().unwrap();
        config.records.courses = vec![Course::new("CS 101", "Intro to Code")];
        assert!(config.validate().is_err());
    }
}

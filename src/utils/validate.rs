use once_cell::sync::Lazy;
use regex::Regex;

static COURSE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{2,16}$").expect("Invalid course code regex"));

pub fn validate_course_code(code: &str) -> Result<(), &'static str> {
    // 课程代码格式校验：2 到 16 位字母、数字、下划线或连字符
    if !COURSE_CODE_RE.is_match(code) {
        return Err(
            "Course code must be 2-16 letters, numbers, underscores or hyphens without spaces",
        );
    }
    Ok(())
}

/// 必填文本字段校验，仅拒绝空字符串
pub fn validate_required(field: &'static str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    Ok(())
}

/// 成绩规范化：去除首尾控制字符与 ASCII 空格并转为大写，空白成绩返回 None
///
/// 只去除不大于 U+0020 的字符，U+00A0 等 Unicode 空白保留。
pub fn normalize_grade(grade: &str) -> Option<String> {
    let trimmed = grade.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_course_codes() {
        assert!(validate_course_code("CS101").is_ok());
        assert!(validate_course_code("PH105").is_ok());
        assert!(validate_course_code("bio-2").is_ok());
    }

    #[test]
    fn test_invalid_course_codes() {
        assert!(validate_course_code("").is_err());
        assert!(validate_course_code("C").is_err());
        assert!(validate_course_code("CS 101").is_err());
        assert!(validate_course_code("ABCDEFGHIJKLMNOPQ").is_err());
    }

    #[test]
    fn test_required_field() {
        assert!(validate_required("Name", "Bob").is_ok());
        assert_eq!(
            validate_required("Major", "").unwrap_err(),
            "Major cannot be empty"
        );
        // 与原有表单行为一致：仅空字符串视为缺失
        assert!(validate_required("Name", " ").is_ok());
    }

    #[test]
    fn test_normalize_grade() {
        assert_eq!(normalize_grade("a-").as_deref(), Some("A-"));
        assert_eq!(normalize_grade("  b+ ").as_deref(), Some("B+"));
        assert_eq!(normalize_grade("92").as_deref(), Some("92"));
        assert_eq!(normalize_grade("   "), None);
        assert_eq!(normalize_grade(""), None);
        assert_eq!(normalize_grade("\t b \r\n").as_deref(), Some("B"));
    }

    #[test]
    fn test_normalize_grade_keeps_unicode_whitespace() {
        assert_eq!(normalize_grade("\u{00A0}").as_deref(), Some("\u{00A0}"));
        assert_eq!(normalize_grade(" \u{3000}a ").as_deref(), Some("\u{3000}A"));
    }
}

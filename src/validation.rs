use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Minimum password length accepted on signup, matching the account rules of
/// the original web service.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Inline form error surfaced next to a field; submission is blocked while
/// any of these exist.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

pub fn require(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
    }
}

/// Required + shape check in one step so an empty email reports a single
/// error, not two.
pub fn check_email(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
    } else if !is_valid_email(value) {
        errors.push(FieldError::new(field, "Enter a valid email address"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("demo@example.com"));
        assert!(is_valid_email("  demo@example.com  "));
        assert!(!is_valid_email("demo"));
        assert!(!is_valid_email("demo@example"));
        assert!(!is_valid_email("demo @example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_require_flags_blank_values() {
        let mut errors = Vec::new();
        require("password", "   ", &mut errors);
        require("username", "demo", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn test_check_email_reports_one_error_per_field() {
        let mut errors = Vec::new();
        check_email("email", "", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "This field is required");

        errors.clear();
        check_email("email", "not-an-email", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Enter a valid email address");
    }
}

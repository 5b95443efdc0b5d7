//! Field validation for the registration/login surface

use super::types::{LoginPayload, RegisterPayload};
use crate::features::shared::{is_blank, is_valid_email};

/// Minimum password length accepted at registration
pub const PASSWORD_MIN_LEN: usize = 6;

/// Collects every registration violation, in field order.
pub fn validate_registration(payload: &RegisterPayload) -> Vec<String> {
    let mut violations = Vec::new();

    if is_blank(payload.name.as_deref()) {
        violations.push("Name is required".to_string());
    }

    match payload.email.as_deref() {
        email if is_blank(email) => violations.push("Email is required".to_string()),
        Some(email) if !is_valid_email(email.trim()) => {
            violations.push("Please provide a valid email address".to_string())
        }
        _ => {}
    }

    if payload.password.as_deref().map_or(0, str::len) < PASSWORD_MIN_LEN {
        violations.push(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters long"
        ));
    }

    violations
}

/// Collects every login violation, in field order.
pub fn validate_login(payload: &LoginPayload) -> Vec<String> {
    let mut violations = Vec::new();

    if is_blank(payload.email.as_deref()) {
        violations.push("Email is required".to_string());
    }

    if is_blank(payload.password.as_deref()) {
        violations.push("Password is required".to_string());
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> RegisterPayload {
        RegisterPayload {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn test_acceptable_registration() {
        let violations =
            validate_registration(&register(Some("Jane"), Some("jane@example.com"), Some("hunter42")));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_registration_collects_all_violations_in_order() {
        let violations = validate_registration(&register(None, None, None));
        assert_eq!(
            violations,
            vec![
                "Name is required".to_string(),
                "Email is required".to_string(),
                "Password must be at least 6 characters long".to_string(),
            ]
        );
    }

    #[test]
    fn test_malformed_email() {
        let violations =
            validate_registration(&register(Some("Jane"), Some("jane@nowhere"), Some("hunter42")));
        assert_eq!(
            violations,
            vec!["Please provide a valid email address".to_string()]
        );
    }

    #[test]
    fn test_short_password() {
        let violations =
            validate_registration(&register(Some("Jane"), Some("jane@example.com"), Some("abc")));
        assert_eq!(
            violations,
            vec!["Password must be at least 6 characters long".to_string()]
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        let violations = validate_login(&LoginPayload {
            email: Some("  ".to_string()),
            password: None,
        });
        assert_eq!(
            violations,
            vec!["Email is required".to_string(), "Password is required".to_string()]
        );
    }

    #[test]
    fn test_login_accepts_any_nonblank_pair() {
        let violations = validate_login(&LoginPayload {
            email: Some("jane@example.com".to_string()),
            password: Some("hunter42".to_string()),
        });
        assert!(violations.is_empty());
    }
}

//! Shared validation primitives
//!
//! The per-operation validators (books, registration, login) are built from
//! these predicates. All of them are pure; none of them short-circuits
//! anything on its own.

use std::sync::LazyLock;

use regex::Regex;

pub use crate::store::is_valid_id as is_object_id;

/// Local part, `@`, domain, dotted suffix of 2-3 characters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern is valid")
});

/// True when the value is missing or empty after trimming
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// True when the value has a general email shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("Dune")));
        assert!(!is_blank(Some("  Dune  ")));
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe@mail.example.org"));
        assert!(is_valid_email("jane-doe@sub.example.io"));
        assert!(is_valid_email("j_d@example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@example.commerce"));
        assert!(!is_valid_email("jane doe@example.com"));
    }

    #[test]
    fn test_object_id_reexport() {
        assert!(is_object_id("507f1f77bcf86cd799439011"));
        assert!(!is_object_id("not-an-id"));
    }
}

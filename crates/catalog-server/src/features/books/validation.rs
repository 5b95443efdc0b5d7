//! Field validation for submitted book records

use super::types::BookPayload;
use crate::features::shared::is_blank;

/// Collects every violation in the submitted record, in field order.
///
/// `title`, `author` and `genre` must be non-empty after trimming. `price`,
/// when present, must be numeric and not negative; a missing `price` is the
/// create operation's required-field concern, not this validator's. An empty
/// result means the record is acceptable.
pub fn validate_book(payload: &BookPayload) -> Vec<String> {
    let mut violations = Vec::new();

    if is_blank(payload.title.as_deref()) {
        violations.push("Title is required".to_string());
    }

    if is_blank(payload.author.as_deref()) {
        violations.push("Author is required".to_string());
    }

    if is_blank(payload.genre.as_deref()) {
        violations.push("Genre is required".to_string());
    }

    if payload.price.is_some() && !payload.price_number().is_some_and(|price| price >= 0.0) {
        violations.push("Price must be a positive number".to_string());
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> BookPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_acceptable_record() {
        let violations = validate_book(&payload(json!({
            "title": "Dune", "author": "Herbert", "genre": "SciFi", "price": 15
        })));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_price_of_zero_is_acceptable() {
        let violations = validate_book(&payload(json!({
            "title": "Dune", "author": "Herbert", "genre": "SciFi", "price": 0
        })));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_blank_text_fields_collect_in_order() {
        let violations = validate_book(&payload(json!({
            "title": "  ", "author": "", "genre": "SciFi", "price": 5
        })));
        assert_eq!(
            violations,
            vec!["Title is required".to_string(), "Author is required".to_string()]
        );
    }

    #[test]
    fn test_negative_price() {
        let violations = validate_book(&payload(json!({
            "title": "Dune", "author": "Herbert", "genre": "SciFi", "price": -3
        })));
        assert_eq!(violations, vec!["Price must be a positive number".to_string()]);
    }

    #[test]
    fn test_non_numeric_price() {
        let violations = validate_book(&payload(json!({
            "title": "Dune", "author": "Herbert", "genre": "SciFi", "price": "free"
        })));
        assert_eq!(violations, vec!["Price must be a positive number".to_string()]);
    }

    #[test]
    fn test_absent_price_is_not_this_validators_concern() {
        let violations = validate_book(&payload(json!({
            "title": "Dune", "author": "Herbert", "genre": "SciFi"
        })));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_never_short_circuits() {
        let violations = validate_book(&payload(json!({
            "title": "", "author": "", "genre": "", "price": -1
        })));
        assert_eq!(violations.len(), 4);
    }
}

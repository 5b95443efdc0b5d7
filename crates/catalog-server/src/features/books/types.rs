//! Wire types for the books feature

use serde::Deserialize;
use serde_json::Value;

use crate::store::{BookUpdate, NewBook};

/// Submitted book record for create and update.
///
/// Every field is optional: presence checks and content validation are
/// separate, ordered pipeline stages, so nothing is rejected at decode time.
/// `price` stays a raw JSON value so a non-numeric price reaches the validator
/// and gets the price-specific violation instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub price: Option<Value>,
    pub in_stock: Option<bool>,
}

impl BookPayload {
    /// `price` as a number, when it is one
    pub fn price_number(&self) -> Option<f64> {
        self.price.as_ref().and_then(Value::as_f64)
    }

    /// True when all create-required fields are present
    pub fn has_required_fields(&self) -> bool {
        self.title.is_some() && self.author.is_some() && self.genre.is_some() && self.price.is_some()
    }

    /// Converts into a store record. The presence and content checks run
    /// before this; any still-missing field falls back to its zero value and
    /// is caught by the store's own constraints.
    pub fn into_record(self) -> NewBook {
        let price = self.price_number().unwrap_or_default();
        NewBook {
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            price,
            in_stock: self.in_stock,
        }
    }

    /// Converts into replacement fields for an update. A non-numeric `price`
    /// is dropped rather than applied.
    pub fn into_update(self) -> BookUpdate {
        let price = self.price_number();
        BookUpdate {
            title: self.title,
            author: self.author,
            genre: self.genre,
            price,
            in_stock: self.in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_camel_case() {
        let payload: BookPayload = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "SciFi",
            "price": 15,
            "inStock": false
        }))
        .unwrap();
        assert_eq!(payload.title.as_deref(), Some("Dune"));
        assert_eq!(payload.price_number(), Some(15.0));
        assert_eq!(payload.in_stock, Some(false));
        assert!(payload.has_required_fields());
    }

    #[test]
    fn test_null_price_counts_as_absent() {
        let payload: BookPayload = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "SciFi",
            "price": null
        }))
        .unwrap();
        assert!(!payload.has_required_fields());
    }

    #[test]
    fn test_non_numeric_price_is_present_but_not_a_number() {
        let payload: BookPayload = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "SciFi",
            "price": "fifteen"
        }))
        .unwrap();
        assert!(payload.has_required_fields());
        assert_eq!(payload.price_number(), None);
    }

    #[test]
    fn test_into_record_defaults() {
        let payload: BookPayload = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "genre": "SciFi",
            "price": 15.5
        }))
        .unwrap();
        let record = payload.into_record();
        assert_eq!(record.price, 15.5);
        assert_eq!(record.in_stock, None);
    }
}

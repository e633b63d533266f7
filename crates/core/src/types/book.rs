//! Book catalogue records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::BookId;

/// A book as owned by the backend.
///
/// The admin UI never caches these beyond the visible table row; the row id
/// is the single correlation key back to the backend record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Backend-assigned id.
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Cover image URL.
    pub image: String,
}

/// The create/update request body for a book.
///
/// Identical to [`BookRecord`] minus the id, which the backend assigns on
/// create and the resource path carries on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format() {
        let json = serde_json::json!({
            "id": 7,
            "title": "The Sea",
            "author": "J. Banville",
            "price": 11.99,
            "image": "sea.jpg"
        });

        let record: BookRecord = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(record.id, BookId::new(7));
        assert_eq!(record.price, Decimal::new(1199, 2));
        assert_eq!(serde_json::to_value(&record).unwrap(), json);
    }

    #[test]
    fn test_draft_price_serializes_as_number() {
        let draft = BookDraft {
            title: "T".to_string(),
            author: "A".to_string(),
            price: Decimal::new(850, 2),
            image: "t.jpg".to_string(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["price"], serde_json::json!(8.5));
    }
}

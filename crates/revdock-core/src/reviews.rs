//! Review entities stored in the product review metafield.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published review attached to a product.
///
/// The review list lives as a JSON array in a product metafield; this is the
/// element shape. Entries written by older storefront-proxy deployments carry
/// `rating` as a JSON string (`"5"`), so deserialization accepts both forms.
/// Serialization always emits a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "rating_number_or_string")]
    pub rating: u8,
    pub message: String,
}

impl Review {
    /// Creates a review with a fresh v4 UUID id.
    #[must_use]
    pub fn new(name: String, rating: u8, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            rating,
            message,
        }
    }
}

/// An unsaved single-review submission.
///
/// The storefront form posts every field as text, so `rating` stays raw
/// until validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rating: String,
}

fn rating_number_or_string<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u8),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<u8>()
            .map_err(|_| D::Error::custom(format!("rating is not a number: '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_uuid_id() {
        let review = Review::new("Alice".to_string(), 5, "Great shoe".to_string());
        assert!(Uuid::parse_str(&review.id).is_ok());
    }

    #[test]
    fn new_ids_are_unique() {
        let a = Review::new("A".to_string(), 1, "m".to_string());
        let b = Review::new("B".to_string(), 2, "m".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn deserialize_numeric_rating() {
        let review: Review =
            serde_json::from_str(r#"{"id":"r1","name":"Alice","rating":5,"message":"Nice"}"#)
                .unwrap();
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn deserialize_string_rating() {
        let review: Review =
            serde_json::from_str(r#"{"id":"r1","name":"Alice","rating":"4","message":"Nice"}"#)
                .unwrap();
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn deserialize_rejects_non_numeric_string_rating() {
        let result = serde_json::from_str::<Review>(
            r#"{"id":"r1","name":"Alice","rating":"great","message":"Nice"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn serialize_emits_numeric_rating() {
        let review = Review {
            id: "r1".to_string(),
            name: "Alice".to_string(),
            rating: 3,
            message: "Fine".to_string(),
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["rating"], serde_json::json!(3));
    }

    #[test]
    fn draft_fields_default_to_empty() {
        let draft: ReviewDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.name, "");
        assert_eq!(draft.message, "");
        assert_eq!(draft.rating, "");
    }
}

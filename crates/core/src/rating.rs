//! Rating request validation and casting.
//!
//! Rating bodies arrive loosely typed. Presence is checked with JavaScript-style truthiness
//! before the store is touched; casting to the stored [`Rating`] shape happens afterwards and a
//! cast failure is a persistence failure, not a validation one.

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{coerce, Rating, RecipeError, RecipeResult};

/// Body of `POST /recipes/{id}/rate`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct RatingRequest {
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 5)]
    pub rating: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Great")]
    pub comment: Option<Value>,
}

impl RatingRequest {
    /// Returns [`RecipeError::MissingRating`] unless both members are present and truthy.
    pub fn require_present(&self) -> RecipeResult<()> {
        let present = |v: &Option<Value>| v.as_ref().is_some_and(is_truthy);
        if present(&self.rating) && present(&self.comment) {
            Ok(())
        } else {
            Err(RecipeError::MissingRating)
        }
    }

    /// Casts both members to the stored [`Rating`] shape.
    pub fn cast(&self) -> RecipeResult<Rating> {
        let rating = self.rating.as_ref().unwrap_or(&Value::Null);
        let comment = self.comment.as_ref().unwrap_or(&Value::Null);
        Ok(Rating {
            rating: coerce::number(rating, "rating")?,
            comment: coerce::text(comment, "comment")?,
        })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> RatingRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn both_members_truthy_passes() {
        assert!(request(json!({ "rating": 5, "comment": "Great" }))
            .require_present()
            .is_ok());
    }

    #[test]
    fn missing_or_falsy_members_are_rejected() {
        let bodies = [
            json!({}),
            json!({ "rating": 5 }),
            json!({ "comment": "Great" }),
            json!({ "rating": 0, "comment": "Great" }),
            json!({ "rating": 5, "comment": "" }),
            json!({ "rating": null, "comment": "Great" }),
            json!({ "rating": false, "comment": "Great" }),
        ];

        for body in bodies {
            let err = request(body.clone()).require_present().unwrap_err();
            assert!(
                matches!(err, RecipeError::MissingRating),
                "expected rejection for {body}"
            );
            assert_eq!(err.to_string(), "Rating and comment are required");
        }
    }

    #[test]
    fn numeric_strings_and_numbers_cast() {
        let rating = request(json!({ "rating": "4.5", "comment": 10 }))
            .cast()
            .unwrap();

        assert_eq!(rating.rating, 4.5);
        assert_eq!(rating.comment, "10");
    }

    #[test]
    fn non_numeric_rating_fails_cast() {
        let err = request(json!({ "rating": "lots", "comment": "Great" }))
            .cast()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Cast to Number failed for value \"lots\" (type string) at path \"rating\""
        );
    }

    #[test]
    fn object_comment_fails_cast() {
        let err = request(json!({ "rating": 3, "comment": { "text": "hi" } }))
            .cast()
            .unwrap_err();

        assert!(matches!(err, RecipeError::Cast { path: "comment", .. }));
    }
}

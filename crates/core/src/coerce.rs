//! Casting of loosely typed JSON members to stored field types.
//!
//! Numbers accept numeric strings and booleans. Text accepts numbers and booleans. A text list
//! accepts a single scalar as a one-element list. Anything else fails with
//! [`RecipeError::Cast`] naming the member path.

use serde_json::{Map, Value};

use crate::{Nutrition, Rating, RecipeError, RecipeResult};

/// Casts a present, non-null member; absent or `null` gives `None`.
pub(crate) fn optional<T>(
    value: Option<&Value>,
    cast: impl FnOnce(&Value) -> RecipeResult<T>,
) -> RecipeResult<Option<T>> {
    value.filter(|v| !v.is_null()).map(cast).transpose()
}

/// Like [`optional`], but keeps an explicit `null` apart from an absent member:
/// absent is `None`, `null` is `Some(None)`.
pub(crate) fn nullable<T>(
    value: Option<&Value>,
    cast: impl FnOnce(&Value) -> RecipeResult<T>,
) -> RecipeResult<Option<Option<T>>> {
    value
        .map(|v| if v.is_null() { Ok(None) } else { cast(v).map(Some) })
        .transpose()
}

pub(crate) fn number(value: &Value, path: &'static str) -> RecipeResult<f64> {
    let cast = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    cast.ok_or_else(|| cast_error("Number", value, path))
}

pub(crate) fn text(value: &Value, path: &'static str) -> RecipeResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(cast_error("string", value, path)),
    }
}

/// `null` is an empty list.
pub(crate) fn text_list(value: &Value, path: &'static str) -> RecipeResult<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(|item| text(item, path)).collect(),
        Value::Object(_) => Err(cast_error("[string]", value, path)),
        scalar => Ok(vec![text(scalar, path)?]),
    }
}

/// Unknown nutrition members are dropped.
pub(crate) fn nutrition(value: &Value) -> RecipeResult<Nutrition> {
    let Value::Object(members) = value else {
        return Err(cast_error("Embedded", value, "nutrition"));
    };
    let member = |key: &str| members.get(key);

    Ok(Nutrition {
        calories: optional(member("calories"), |v| number(v, "nutrition.calories"))?,
        protein: optional(member("protein"), |v| text(v, "nutrition.protein"))?,
        fat: optional(member("fat"), |v| text(v, "nutrition.fat"))?,
        carbohydrates: optional(member("carbohydrates"), |v| {
            text(v, "nutrition.carbohydrates")
        })?,
        fiber: optional(member("fiber"), |v| text(v, "nutrition.fiber"))?,
        sugar: optional(member("sugar"), |v| text(v, "nutrition.sugar"))?,
    })
}

/// `null` is an empty list; a single object is a one-element list.
pub(crate) fn ratings(value: &Value) -> RecipeResult<Vec<Rating>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(rating_entry).collect(),
        Value::Object(_) => Ok(vec![rating_entry(value)?]),
        _ => Err(cast_error("Array", value, "ratings")),
    }
}

fn rating_entry(value: &Value) -> RecipeResult<Rating> {
    let Value::Object(members) = value else {
        return Err(cast_error("Embedded", value, "ratings"));
    };
    Ok(Rating {
        rating: number(member_or_null(members, "rating"), "ratings.rating")?,
        comment: text(member_or_null(members, "comment"), "ratings.comment")?,
    })
}

fn member_or_null<'a>(members: &'a Map<String, Value>, key: &str) -> &'a Value {
    members.get(key).unwrap_or(&Value::Null)
}

fn cast_error(kind: &'static str, value: &Value, path: &'static str) -> RecipeError {
    let value_type = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    };
    RecipeError::Cast {
        kind,
        value: value.to_string(),
        value_type,
        path,
    }
}

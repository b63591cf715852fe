//! HTTP error mapping.
//!
//! Every failure leaves the service as a JSON object with a `message` member. Internal errors
//! also carry the underlying detail under `error`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipe_core::RecipeError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal { error: String },
}

impl ApiError {
    /// Mapping shared by list, get, create, update and delete: anything that is not a missing
    /// record is the client's 400.
    pub fn from_recipe_error(op: &'static str, err: RecipeError) -> Self {
        match err {
            RecipeError::NotFound => ApiError::NotFound(err.to_string()),
            RecipeError::Database(_) | RecipeError::Store(_) | RecipeError::Serialization(_) => {
                tracing::error!("{op} error: {:?}", err);
                ApiError::BadRequest(err.to_string())
            }
            other => ApiError::BadRequest(other.to_string()),
        }
    }

    /// Mapping for the rating append: once presence checks pass, every failure other than a
    /// missing record is a 500.
    pub fn from_rating_error(err: RecipeError) -> Self {
        match err {
            RecipeError::NotFound => ApiError::NotFound(err.to_string()),
            RecipeError::MissingRating => ApiError::BadRequest(err.to_string()),
            other => {
                tracing::error!("Add rating error: {:?}", other);
                ApiError::Internal {
                    error: other.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "message": message }))
            }
            ApiError::Internal { error } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal server error", "error": error }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("{0}")]
    InvalidId(#[from] recipe_uuid::UuidError),
    #[error("Recipe not found")]
    NotFound,
    #[error("Rating and comment are required")]
    MissingRating,
    #[error("Cast to {kind} failed for value {value} (type {value_type}) at path \"{path}\"")]
    Cast {
        kind: &'static str,
        value: String,
        value_type: &'static str,
        path: &'static str,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("database error: {0}")]
    Database(#[from] surrealdb::Error),
    #[error("failed to (de)serialize recipe document: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store error: {0}")]
    Store(String),
}

pub type RecipeResult<T> = std::result::Result<T, RecipeError>;

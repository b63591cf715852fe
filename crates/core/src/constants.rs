//! Constants used throughout the recipe core crate.
//!
//! Defaults match the service's historical fixed settings; each can be overridden through the
//! environment at startup (see `config`).

/// Table holding recipe documents.
pub const RECIPES_TABLE: &str = "recipes";

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default document store endpoint.
pub const DEFAULT_DB_URL: &str = "ws://localhost:8000";

/// Default store namespace.
pub const DEFAULT_DB_NAMESPACE: &str = "recipeApp";

/// Default store database.
pub const DEFAULT_DB_DATABASE: &str = "recipeApp";

/// Body of the delete confirmation.
pub const RECIPE_DELETED_MESSAGE: &str = "Recipe deleted successfully";

/// Body of the rating confirmation.
pub const RATING_ADDED_MESSAGE: &str = "Rating and comment added successfully";

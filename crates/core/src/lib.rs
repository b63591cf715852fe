//! # Recipe Core
//!
//! Core business logic for the recipe service.
//!
//! This crate contains the recipe document model and the data operations:
//! - List, get, create, update and delete recipes
//! - Append ratings to a recipe
//! - Document store adapters (SurrealDB and in-process)
//!
//! **No API concerns**: HTTP routing, status codes and response bodies belong in `api-rest`.

mod coerce;
pub mod config;
pub mod constants;
pub mod error;
pub mod rating;
pub mod recipe;
pub mod service;
pub mod store;

pub use config::{StoreConfig, StoreCredentials};
pub use error::{RecipeError, RecipeResult};
pub use rating::RatingRequest;
pub use recipe::{NewRecipe, Nutrition, Rating, Recipe, RecipePatch, RecipeView};
pub use recipe_uuid::RecipeUuid;
pub use service::RecipeService;
pub use store::{MemoryRecipeStore, RecipeStore, SurrealRecipeStore};

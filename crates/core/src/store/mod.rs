//! Document store adapters.
//!
//! [`RecipeStore`] is the seam between [`crate::RecipeService`] and the database. Each method is
//! a single store round trip; absence of a record is reported as `Ok(None)` and left for the
//! service to turn into [`crate::RecipeError::NotFound`].

mod memory;
mod surreal;

pub use memory::MemoryRecipeStore;
pub use surreal::SurrealRecipeStore;

use async_trait::async_trait;
use recipe_uuid::RecipeUuid;

use crate::{NewRecipe, Recipe, RecipePatch, RecipeResult};

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every stored recipe, in the store's natural order.
    async fn list(&self) -> RecipeResult<Vec<Recipe>>;

    async fn get(&self, id: RecipeUuid) -> RecipeResult<Option<Recipe>>;

    /// Persists a new recipe under a freshly allocated identifier.
    async fn create(&self, new: NewRecipe) -> RecipeResult<Recipe>;

    /// Overwrites the fields present in `patch`. Returns the updated record.
    async fn update(&self, id: RecipeUuid, patch: RecipePatch) -> RecipeResult<Option<Recipe>>;

    /// Writes `recipe` over the stored record with the same identifier.
    async fn replace(&self, recipe: Recipe) -> RecipeResult<Option<Recipe>>;

    /// Removes a record, returning it as it was.
    async fn delete(&self, id: RecipeUuid) -> RecipeResult<Option<Recipe>>;
}

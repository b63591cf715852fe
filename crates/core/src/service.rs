//! Recipe service: the six recipe operations.
//!
//! Each operation issues at most one read and one write against the injected store. Path
//! identifiers are validated here, so every operation fails with
//! [`RecipeError::InvalidId`] before touching the store when given a malformed id.

use std::sync::Arc;

use recipe_uuid::RecipeUuid;

use crate::{
    store::RecipeStore, NewRecipe, RatingRequest, Recipe, RecipeError, RecipePatch,
    RecipeResult, RecipeView,
};

/// Pure recipe data operations - no HTTP concerns.
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Lists every recipe in the read shape (`id`, never `_id`).
    pub async fn list_recipes(&self) -> RecipeResult<Vec<RecipeView>> {
        let recipes = self.store.list().await?;
        Ok(recipes.into_iter().map(RecipeView::from).collect())
    }

    /// Fetches one recipe in the read shape.
    ///
    /// # Errors
    /// - [`RecipeError::InvalidId`] if `id` is not a canonical identifier.
    /// - [`RecipeError::NotFound`] if no record has that identifier.
    pub async fn get_recipe(&self, id: &str) -> RecipeResult<RecipeView> {
        let id = RecipeUuid::parse(id)?;
        self.store
            .get(id)
            .await?
            .map(RecipeView::from)
            .ok_or(RecipeError::NotFound)
    }

    /// Persists a new recipe and returns the raw stored document (`_id` included).
    pub async fn create_recipe(&self, new: NewRecipe) -> RecipeResult<Recipe> {
        let recipe = self.store.create(new).await?;
        tracing::debug!(id = %recipe.id, "recipe created");
        Ok(recipe)
    }

    /// Applies `patch` and returns the raw post-update document.
    pub async fn update_recipe(&self, id: &str, patch: RecipePatch) -> RecipeResult<Recipe> {
        let id = RecipeUuid::parse(id)?;
        self.store
            .update(id, patch)
            .await?
            .ok_or(RecipeError::NotFound)
    }

    pub async fn delete_recipe(&self, id: &str) -> RecipeResult<()> {
        let id = RecipeUuid::parse(id)?;
        match self.store.delete(id).await? {
            Some(_) => {
                tracing::debug!(%id, "recipe deleted");
                Ok(())
            }
            None => Err(RecipeError::NotFound),
        }
    }

    /// Appends one rating to a recipe.
    ///
    /// Presence is checked before anything else. The append is a read-modify-write of the
    /// whole record: two concurrent calls against the same recipe can both read the old
    /// ratings, and the later write then drops the earlier rating.
    ///
    /// # Errors
    /// - [`RecipeError::MissingRating`] if `rating` or `comment` is absent or falsy.
    /// - [`RecipeError::InvalidId`] if `id` is not a canonical identifier.
    /// - [`RecipeError::NotFound`] if the record is absent on read or gone by write time.
    /// - [`RecipeError::Cast`] if a member cannot be cast to the stored type.
    pub async fn add_rating(&self, id: &str, request: RatingRequest) -> RecipeResult<()> {
        request.require_present()?;
        let id = RecipeUuid::parse(id)?;

        let mut recipe = self.store.get(id).await?.ok_or(RecipeError::NotFound)?;
        recipe.ratings.push(request.cast()?);

        self.store
            .replace(recipe)
            .await?
            .map(|_| ())
            .ok_or(RecipeError::NotFound)
    }
}

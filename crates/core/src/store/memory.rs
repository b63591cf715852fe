use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use recipe_uuid::RecipeUuid;

use super::RecipeStore;
use crate::{NewRecipe, Recipe, RecipeError, RecipePatch, RecipeResult};

/// Insertion-ordered recipe documents.
type RecipeStorage = Arc<RwLock<Vec<Recipe>>>;

/// In-process recipe store. Lists in insertion order.
#[derive(Clone)]
pub struct MemoryRecipeStore {
    recipes: RecipeStorage,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self {
            recipes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn write(&self) -> RecipeResult<std::sync::RwLockWriteGuard<'_, Vec<Recipe>>> {
        self.recipes
            .write()
            .map_err(|_| RecipeError::Store("Failed to acquire write lock".to_string()))
    }

    fn read(&self) -> RecipeResult<std::sync::RwLockReadGuard<'_, Vec<Recipe>>> {
        self.recipes
            .read()
            .map_err(|_| RecipeError::Store("Failed to acquire read lock".to_string()))
    }
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn list(&self) -> RecipeResult<Vec<Recipe>> {
        Ok(self.read()?.clone())
    }

    async fn get(&self, id: RecipeUuid) -> RecipeResult<Option<Recipe>> {
        Ok(self.read()?.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, new: NewRecipe) -> RecipeResult<Recipe> {
        let recipe = Recipe::new(RecipeUuid::new(), new);
        self.write()?.push(recipe.clone());
        Ok(recipe)
    }

    async fn update(&self, id: RecipeUuid, patch: RecipePatch) -> RecipeResult<Option<Recipe>> {
        let mut recipes = self.write()?;
        Ok(recipes.iter_mut().find(|r| r.id == id).map(|recipe| {
            recipe.apply(patch);
            recipe.clone()
        }))
    }

    async fn replace(&self, recipe: Recipe) -> RecipeResult<Option<Recipe>> {
        let mut recipes = self.write()?;
        Ok(recipes.iter_mut().find(|r| r.id == recipe.id).map(|slot| {
            *slot = recipe;
            slot.clone()
        }))
    }

    async fn delete(&self, id: RecipeUuid) -> RecipeResult<Option<Recipe>> {
        let mut recipes = self.write()?;
        Ok(recipes
            .iter()
            .position(|r| r.id == id)
            .map(|index| recipes.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> NewRecipe {
        NewRecipe {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let store = MemoryRecipeStore::new();
        for name in ["a", "b", "c"] {
            store.create(named(name)).await.unwrap();
        }

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name.unwrap())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_and_delete_report_absence() {
        let store = MemoryRecipeStore::new();
        let missing = RecipeUuid::new();

        assert!(store
            .update(missing, RecipePatch::default())
            .await
            .unwrap()
            .is_none());
        assert!(store.delete(missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replace_overwrites_whole_record() {
        let store = MemoryRecipeStore::new();
        let mut recipe = store.create(named("Soup")).await.unwrap();
        recipe.name = None;
        recipe.image = Some("soup.png".into());

        let replaced = store.replace(recipe.clone()).await.unwrap().unwrap();

        assert_eq!(replaced, recipe);
        assert_eq!(store.get(recipe.id).await.unwrap(), Some(recipe));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemoryRecipeStore::new();
        let recipe = store.create(named("Soup")).await.unwrap();

        assert_eq!(store.delete(recipe.id).await.unwrap(), Some(recipe.clone()));
        assert!(store.get(recipe.id).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }
}

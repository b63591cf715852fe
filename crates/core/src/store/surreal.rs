use async_trait::async_trait;
use recipe_uuid::RecipeUuid;
use surrealdb::{
    engine::any::Any,
    opt::auth::Root,
    Surreal,
};

use super::RecipeStore;
use crate::{
    constants::RECIPES_TABLE, NewRecipe, Recipe, RecipeError, RecipePatch, RecipeResult,
    StoreConfig,
};

/// SurrealDB-backed recipe store.
///
/// Records live in the `recipes` table keyed by the canonical recipe id; the record content is
/// the raw document, `_id` included. The `any` engine lets one client type serve remote
/// (`ws://`, `http://`) and embedded (`mem://`) endpoints.
#[derive(Clone)]
pub struct SurrealRecipeStore {
    db: Surreal<Any>,
}

impl SurrealRecipeStore {
    /// Creates an unconnected client. Calls fail until [`connect`](Self::connect) succeeds.
    pub fn new() -> Self {
        Self { db: Surreal::init() }
    }

    /// Connects, signs in when credentials are configured, and selects namespace/database.
    pub async fn connect(&self, cfg: &StoreConfig) -> RecipeResult<()> {
        self.db.connect(cfg.url().to_string()).await?;
        if let Some(creds) = cfg.credentials() {
            self.db
                .signin(Root {
                    username: creds.username(),
                    password: creds.password(),
                })
                .await?;
        }
        self.db
            .use_ns(cfg.namespace())
            .use_db(cfg.database())
            .await?;
        Ok(())
    }
}

impl Default for SurrealRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for SurrealRecipeStore {
    async fn list(&self) -> RecipeResult<Vec<Recipe>> {
        let recipes: Vec<Recipe> = self.db.select(RECIPES_TABLE).await?;
        Ok(recipes)
    }

    async fn get(&self, id: RecipeUuid) -> RecipeResult<Option<Recipe>> {
        let recipe: Option<Recipe> = self.db.select((RECIPES_TABLE, id.to_string())).await?;
        Ok(recipe)
    }

    async fn create(&self, new: NewRecipe) -> RecipeResult<Recipe> {
        let recipe = Recipe::new(RecipeUuid::new(), new);
        let created: Option<Recipe> = self
            .db
            .create((RECIPES_TABLE, recipe.id.to_string()))
            .content(recipe)
            .await?;

        created.ok_or_else(|| RecipeError::Store("Failed to create recipe".into()))
    }

    async fn update(&self, id: RecipeUuid, patch: RecipePatch) -> RecipeResult<Option<Recipe>> {
        let serde_json::Value::Object(fields) = serde_json::to_value(&patch)? else {
            return Err(RecipeError::Store("recipe patch is not an object".into()));
        };
        if fields.is_empty() {
            return self.get(id).await;
        }

        // Field names come from `RecipePatch` serialisation, never from the client directly.
        let assignments = fields
            .keys()
            .map(|field| format!("{field} = $set_{field}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "UPDATE type::thing('{RECIPES_TABLE}', $recipe_key) SET {assignments} RETURN AFTER"
        );

        let mut db_query = self.db.query(query).bind(("recipe_key", id.to_string()));
        for (field, value) in fields {
            db_query = db_query.bind((format!("set_{field}"), value));
        }

        let mut response = db_query.await?;
        let updated: Vec<Recipe> = response.take(0)?;
        Ok(updated.into_iter().next())
    }

    async fn replace(&self, recipe: Recipe) -> RecipeResult<Option<Recipe>> {
        let replaced: Option<Recipe> = self
            .db
            .update((RECIPES_TABLE, recipe.id.to_string()))
            .content(recipe)
            .await?;
        Ok(replaced)
    }

    async fn delete(&self, id: RecipeUuid) -> RecipeResult<Option<Recipe>> {
        let removed: Option<Recipe> = self.db.delete((RECIPES_TABLE, id.to_string())).await?;
        Ok(removed)
    }
}

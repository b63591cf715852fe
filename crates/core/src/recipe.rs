//! Recipe document model.
//!
//! A recipe has two JSON shapes:
//! - [`Recipe`], the raw stored document, carries its identifier under `_id`. Create and update
//!   responses return this shape unchanged.
//! - [`RecipeView`], the read shape, carries the same identifier under `id` and never `_id`.
//!   List and get responses return this shape.
//!
//! Request bodies are decoded into [`NewRecipe`] (create) and [`RecipePatch`] (update). Unknown
//! members are ignored; known members are cast to their stored types.

use recipe_uuid::RecipeUuid;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{coerce, RecipeError, RecipeResult};

/// Nested nutrition facts. No consistency checks are applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<String>,
}

/// One entry of a recipe's ratings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub rating: f64,
    pub comment: String,
}

/// A recipe document as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "550e8400e29b41d4a716446655440000")]
    pub id: RecipeUuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<f64>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Builds the document for a freshly allocated identifier. `ratings` always starts empty.
    pub fn new(id: RecipeUuid, new: NewRecipe) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            ingredients: new.ingredients.unwrap_or_default(),
            instructions: new.instructions.unwrap_or_default(),
            image: new.image,
            prep_time: new.prep_time,
            ratings: Vec::new(),
            nutrition: new.nutrition,
        }
    }

    /// Overwrites every field present in `patch`, leaving the rest untouched. An explicit
    /// `null` clears the field.
    pub fn apply(&mut self, patch: RecipePatch) {
        let RecipePatch {
            name,
            description,
            ingredients,
            instructions,
            image,
            prep_time,
            ratings,
            nutrition,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = instructions {
            self.instructions = instructions;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(prep_time) = prep_time {
            self.prep_time = prep_time;
        }
        if let Some(ratings) = ratings {
            self.ratings = ratings;
        }
        if let Some(nutrition) = nutrition {
            self.nutrition = nutrition;
        }
    }
}

/// A recipe as returned by list and get: the identifier is exposed as `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    #[schema(value_type = String, example = "550e8400e29b41d4a716446655440000")]
    pub id: RecipeUuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<f64>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl From<Recipe> for RecipeView {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            image: recipe.image,
            prep_time: recipe.prep_time,
            ratings: recipe.ratings,
            nutrition: recipe.nutrition,
        }
    }
}

/// Create request body. A `ratings` member, if sent, is ignored.
///
/// Members are cast the way the document store would: `"20"` becomes `20`, `5` becomes `"5"`,
/// and a single string becomes a one-element list. `null` counts as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct NewRecipe {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub image: Option<String>,
    pub prep_time: Option<f64>,
    pub nutrition: Option<Nutrition>,
}

impl TryFrom<Map<String, Value>> for NewRecipe {
    type Error = RecipeError;

    fn try_from(body: Map<String, Value>) -> RecipeResult<Self> {
        let member = |key: &str| body.get(key);

        Ok(Self {
            name: coerce::optional(member("name"), |v| coerce::text(v, "name"))?,
            description: coerce::optional(member("description"), |v| {
                coerce::text(v, "description")
            })?,
            ingredients: coerce::optional(member("ingredients"), |v| {
                coerce::text_list(v, "ingredients")
            })?,
            instructions: coerce::optional(member("instructions"), |v| {
                coerce::text_list(v, "instructions")
            })?,
            image: coerce::optional(member("image"), |v| coerce::text(v, "image"))?,
            prep_time: coerce::optional(member("prepTime"), |v| coerce::number(v, "prepTime"))?,
            nutrition: coerce::optional(member("nutrition"), coerce::nutrition)?,
        })
    }
}

/// Update request body. Present members replace the stored field wholesale.
///
/// The outer `Option` of a scalar member records presence; `Some(None)` is an explicit `null`,
/// which clears the field. A `null` list member clears the list. Values are cast as for
/// [`NewRecipe`].
///
/// Serialises to an object holding only the present members, which is what the SurrealDB
/// adapter turns into `SET` assignments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct RecipePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, nullable)]
    pub name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, nullable)]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, nullable)]
    pub image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, nullable)]
    pub prep_time: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Vec<Rating>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Nutrition>, nullable)]
    pub nutrition: Option<Option<Nutrition>>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl TryFrom<Map<String, Value>> for RecipePatch {
    type Error = RecipeError;

    fn try_from(body: Map<String, Value>) -> RecipeResult<Self> {
        let member = |key: &str| body.get(key);
        let list = |key: &'static str| {
            member(key)
                .map(|v| coerce::text_list(v, key))
                .transpose()
        };

        Ok(Self {
            name: coerce::nullable(member("name"), |v| coerce::text(v, "name"))?,
            description: coerce::nullable(member("description"), |v| {
                coerce::text(v, "description")
            })?,
            ingredients: list("ingredients")?,
            instructions: list("instructions")?,
            image: coerce::nullable(member("image"), |v| coerce::text(v, "image"))?,
            prep_time: coerce::nullable(member("prepTime"), |v| coerce::number(v, "prepTime"))?,
            ratings: member("ratings").map(coerce::ratings).transpose()?,
            nutrition: coerce::nullable(member("nutrition"), coerce::nutrition)?,
        })
    }
}

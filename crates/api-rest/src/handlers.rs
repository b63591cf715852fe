//! Recipe route handlers.
//!
//! Read handlers (list, get) answer with the `RecipeView` shape; write handlers (create,
//! update) answer with the raw stored `Recipe`, `_id` included.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use recipe_core::{
    constants::{RATING_ADDED_MESSAGE, RECIPE_DELETED_MESSAGE},
    NewRecipe, RatingRequest, Recipe, RecipePatch, RecipeView,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::ApiError, error::ApiResult, AppState};

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Confirmation body for delete and rate.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Unwraps a JSON body. A request without a JSON content type reads as an empty object.
fn json_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used by monitoring and load balancers. Does not touch the store.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Recipe service is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeView]),
        (status = 400, description = "Store error", body = MessageRes)
    )
)]
/// List all recipes
///
/// Every record is returned with its identifier under `id`. No pagination; order is the
/// store's natural order.
#[axum::debug_handler]
pub async fn list_recipes(State(state): State<AppState>) -> ApiResult<Json<Vec<RecipeView>>> {
    state
        .recipe_service
        .list_recipes()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_recipe_error("List recipes", e))
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "The recipe", body = RecipeView),
        (status = 400, description = "Malformed identifier or store error", body = MessageRes),
        (status = 404, description = "Recipe not found", body = MessageRes)
    )
)]
/// Get a single recipe by identifier
#[axum::debug_handler]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeView>> {
    state
        .recipe_service
        .get_recipe(&id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_recipe_error("Get recipe", e))
}

#[utoipa::path(
    post,
    path = "/recipes",
    request_body = NewRecipe,
    responses(
        (status = 201, description = "Recipe created; raw stored document", body = Recipe),
        (status = 400, description = "Bad request", body = MessageRes)
    )
)]
/// Create a new recipe
///
/// The response is the document as stored, so the identifier appears under `_id`.
#[axum::debug_handler]
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<NewRecipe>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Recipe>)> {
    let new = json_or_default(body)?;
    let recipe = state
        .recipe_service
        .create_recipe(new)
        .await
        .map_err(|e| ApiError::from_recipe_error("Create recipe", e))?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    request_body = RecipePatch,
    responses(
        (status = 200, description = "Recipe updated; raw stored document", body = Recipe),
        (status = 400, description = "Bad request", body = MessageRes),
        (status = 404, description = "Recipe not found", body = MessageRes)
    )
)]
/// Update fields of an existing recipe
///
/// Members present in the body replace the stored fields; omitted members are untouched.
#[axum::debug_handler]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RecipePatch>, JsonRejection>,
) -> ApiResult<Json<Recipe>> {
    let patch = json_or_default(body)?;
    state
        .recipe_service
        .update_recipe(&id, patch)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_recipe_error("Update recipe", e))
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageRes),
        (status = 400, description = "Bad request", body = MessageRes),
        (status = 404, description = "Recipe not found", body = MessageRes)
    )
)]
/// Delete a recipe
#[axum::debug_handler]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageRes>> {
    state
        .recipe_service
        .delete_recipe(&id)
        .await
        .map_err(|e| ApiError::from_recipe_error("Delete recipe", e))?;
    Ok(Json(MessageRes::new(RECIPE_DELETED_MESSAGE)))
}

#[utoipa::path(
    post,
    path = "/recipes/{id}/rate",
    params(("id" = String, Path, description = "Recipe identifier")),
    request_body = RatingRequest,
    responses(
        (status = 200, description = "Rating appended", body = MessageRes),
        (status = 400, description = "Rating and comment are required", body = MessageRes),
        (status = 404, description = "Recipe not found", body = MessageRes),
        (status = 500, description = "Internal server error")
    )
)]
/// Append a rating and comment to a recipe
///
/// The updated recipe is not returned.
#[axum::debug_handler]
pub async fn rate_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RatingRequest>, JsonRejection>,
) -> ApiResult<Json<MessageRes>> {
    let request = json_or_default(body)?;
    state
        .recipe_service
        .add_rating(&id, request)
        .await
        .map_err(ApiError::from_rating_error)?;
    Ok(Json(MessageRes::new(RATING_ADDED_MESSAGE)))
}

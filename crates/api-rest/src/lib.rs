//! # API REST
//!
//! REST API implementation for the recipe service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation (served as JSON)
//! - REST-specific concerns (JSON bodies, error shapes, CORS)
//!
//! Uses `recipe-core` for all data operations.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use recipe_core::RecipeService;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub use error::{ApiError, ApiResult};

/// Application state shared across REST API handlers
///
/// Holds the recipe service, which in turn owns the store client created at startup.
#[derive(Clone)]
pub struct AppState {
    pub(crate) recipe_service: RecipeService,
}

impl AppState {
    pub fn new(recipe_service: RecipeService) -> Self {
        Self { recipe_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_recipes,
        handlers::get_recipe,
        handlers::create_recipe,
        handlers::update_recipe,
        handlers::delete_recipe,
        handlers::rate_recipe,
    ),
    components(schemas(
        handlers::HealthRes,
        handlers::MessageRes,
        recipe_core::Recipe,
        recipe_core::RecipeView,
        recipe_core::NewRecipe,
        recipe_core::RecipePatch,
        recipe_core::RatingRequest,
        recipe_core::Rating,
        recipe_core::Nutrition,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router: recipe routes, health, OpenAPI JSON, permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        .route("/recipes/:id/rate", post(handlers::rate_recipe))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

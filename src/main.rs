use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use recipe_core::{
    RecipeService, StoreConfig, SurrealRecipeStore, constants::DEFAULT_REST_ADDR,
};

/// Main entry point for the recipe service
///
/// Connects the document store, then starts the REST server. The server starts whether or
/// not the store connection succeeds; store failures then surface per request.
///
/// # Environment Variables
/// - `RECIPE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `RECIPE_DB_URL`: document store endpoint (default: "ws://localhost:8000")
/// - `RECIPE_DB_NAMESPACE` / `RECIPE_DB_DATABASE`: store namespace and database (default: "recipeApp")
/// - `RECIPE_DB_USERNAME` / `RECIPE_DB_PASSWORD`: root credentials, sign-in skipped when unset
///
/// # Returns
/// * `Ok(())` - If the server runs and shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration is invalid or the listener cannot bind
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipe_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("recipe_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("RECIPE_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let store_config = StoreConfig::from_env_values(
        std::env::var("RECIPE_DB_URL").ok(),
        std::env::var("RECIPE_DB_NAMESPACE").ok(),
        std::env::var("RECIPE_DB_DATABASE").ok(),
        std::env::var("RECIPE_DB_USERNAME").ok(),
        std::env::var("RECIPE_DB_PASSWORD").ok(),
    )?;

    let store = SurrealRecipeStore::new();
    connect_store(&store, &store_config).await;

    let recipe_service = RecipeService::new(Arc::new(store));
    let app = api_rest::router(AppState::new(recipe_service));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    tracing::info!("++ Starting recipe REST on {}", rest_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Connects the store before the listener binds. Failures are logged and reported as `false`.
async fn connect_store(store: &SurrealRecipeStore, config: &StoreConfig) -> bool {
    match store.connect(config).await {
        Ok(()) => {
            tracing::info!("Connected to document store at {}", config.url());
            true
        }
        Err(e) => {
            tracing::error!("Document store connection error: {:?}", e);
            false
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::{NewRecipe, RecipeStore};

    fn config(url: &str) -> StoreConfig {
        StoreConfig::new(url.into(), "test".into(), "test".into(), None, None).unwrap()
    }

    #[tokio::test]
    async fn connected_store_serves_requests() {
        let store = SurrealRecipeStore::new();

        assert!(connect_store(&store, &config("mem://")).await);

        let created = store.create(NewRecipe::default()).await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn failed_connection_is_reported_not_fatal() {
        let store = SurrealRecipeStore::new();

        assert!(!connect_store(&store, &config("unknown://nowhere")).await);
        assert!(store.list().await.is_err());
    }
}

//! Router configuration and server setup.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Builds the CORS layer from the configured origins.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new().layer(cors_layer(&state.config));

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // Views
        .route("/api/views", get(handlers::list_views))
        .route("/api/views/:view_type", get(handlers::get_view))
        .route("/api/views/:view_type/stats", get(handlers::get_view_stats))
        .route("/api/views/:view_type/3d", get(handlers::get_view_scene))
        // Apply middleware
        .layer(middleware)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        data_dir = %state.config.data_dir.display(),
        "API server listening on {}",
        addr
    );
    axum::serve(listener, create_router(state)).await
}

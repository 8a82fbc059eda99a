//! Router configuration and server setup.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Builds the CORS layer from the configured origins.
///
/// A `"*"` entry means any origin; otherwise only the listed origins are
/// allowed. Entries that do not parse as header values are skipped.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origin = if config.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // Debate pipeline
        .route("/api/select-agents", post(handlers::select_agents))
        .route("/api/debate", post(handlers::debate))
        .route("/api/synthesize-prd", post(handlers::synthesize))
        .route("/api/synthesize", post(handlers::synthesize))
        .route(
            "/api/generate-deployment-plan",
            post(handlers::generate_deployment_plan),
        )
        // Export and persistence boundary
        .route("/api/download-pdf", post(handlers::download_pdf))
        .route("/api/save-prd", post(handlers::save_prd))
        // Apply middleware
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}

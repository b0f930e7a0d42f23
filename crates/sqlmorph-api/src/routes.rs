use crate::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service metadata
        .route("/", get(handlers::info))
        .route("/health", get(handlers::health))
        // Conversion and optimization
        .route("/convert", post(handlers::convert_sql))
        .route("/optimize", post(handlers::optimize_sql))
        // Sample catalog
        .route("/examples/{dialect}", get(handlers::dialect_samples))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}

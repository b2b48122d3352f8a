//! HTTP route handlers and router configuration

mod admin;
mod entities;
mod queries;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the main application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        // Health check and server stats
        .route("/health", get(admin::health))
        .route("/stats", get(admin::stats))
        // Entity CRUD
        .route("/entities", get(entities::list_all))
        .route("/entity", post(entities::create))
        .route(
            "/entity/:id",
            get(entities::get_by_id)
                .post(entities::update)
                .delete(entities::delete),
        )
        // Geospatial queries
        .route("/entities-around", get(queries::entities_around))
        .route("/entities-in-bearing", get(queries::entities_in_bearing))
        .route("/closest-entity", get(queries::closest_entity))
        .with_state(state.clone());

    // Add middleware
    router = router.layer(TraceLayer::new_for_http());

    // Add CORS if enabled
    if state.config.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}

//! Route definitions and router setup

use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth;
use crate::handlers;
use crate::ServerState;

/// Create the application router with all routes
pub fn create_router(state: ServerState) -> Router {
    // Static segments take precedence over `{id}`, so `/agents/photos`
    // never reaches the by-id handler.
    Router::new()
        .route("/", get(handlers::root))
        .route("/ping", get(handlers::ping))
        .route("/api/v1/docs", get(handlers::docs))
        // Agent catalog
        .route("/api/v1/agents", get(handlers::list_agents))
        .route("/api/v1/agents/photos", get(handlers::list_photos))
        .route("/api/v1/agents/{id}", get(handlers::get_agent))
        .route("/api/v1/agents/{id}/photos", get(handlers::agent_photos))
        .route("/role/{role}", get(handlers::agents_by_role))
        // Key issuance
        .route(
            "/generate-api-key",
            get(handlers::generate_api_key).post(handlers::generate_api_key),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

//! API key and admin key checks.
//!
//! - Every route except [`PUBLIC_PATHS`] requires a valid `x-api-key` header
//! - `/generate-api-key` instead requires `x-admin-key` to equal the
//!   configured admin secret

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use agent_catalog_core::{constant_time_eq, CatalogError, CatalogResult};

use crate::api::ApiResponse;
use crate::ServerState;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Paths served without an API key
pub const PUBLIC_PATHS: [&str; 4] = ["/", "/ping", "/api/v1/docs", "/generate-api-key"];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|h| h.to_str().ok())
}

/// Middleware rejecting requests to protected paths without a valid key.
///
/// Runs before routing, so unknown paths are rejected the same way.
pub async fn require_api_key(
    State(state): State<ServerState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.require_api_key || is_public_path(req.uri().path()) {
        return next.run(req).await;
    }

    let candidate = header_value(req.headers(), API_KEY_HEADER).map(str::to_owned);
    if state.api_keys.validate(candidate.as_deref()).await {
        debug!(path = %req.uri().path(), "API key accepted");
        next.run(req).await
    } else {
        warn!(
            path = %req.uri().path(),
            present = candidate.is_some(),
            "Rejected request without valid API key"
        );
        ApiResponse::from(CatalogError::Unauthorized).into_response()
    }
}

/// Check `x-admin-key` against the configured admin secret
pub fn check_admin(state: &ServerState, headers: &HeaderMap) -> CatalogResult<()> {
    let expected = state.admin_key.as_deref().ok_or(CatalogError::Forbidden)?;
    let provided = header_value(headers, ADMIN_KEY_HEADER).unwrap_or("");

    if !provided.is_empty() && constant_time_eq(provided, expected) {
        Ok(())
    } else {
        warn!("Rejected key issuance with invalid admin key");
        Err(CatalogError::Forbidden)
    }
}

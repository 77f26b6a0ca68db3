//! HTTP request handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

use agent_catalog_core::{AgentList, CatalogError, Role};

use crate::api::ApiResponse;
use crate::auth;
use crate::ServerState;

/// Welcome message pointing at the docs
pub async fn root() -> impl IntoResponse {
    ApiResponse::message("Welcome to the Valorant Agents API!")
        .with_field("documentation", "/api/v1/docs")
}

/// Liveness check
pub async fn ping() -> &'static str {
    "pong"
}

/// Endpoint catalog
pub async fn docs() -> impl IntoResponse {
    let roles: Vec<String> = Role::ALL
        .iter()
        .map(|r| r.as_str().to_ascii_lowercase())
        .collect();

    ApiResponse::ok(json!({
        "endpoints": {
            "/api/v1/agents": "Get a list of all agents",
            "/api/v1/agents/{id}": "Get details of a specific agent by ID",
            "/api/v1/agents/photos": "Get photos from all agents",
            "/api/v1/agents/{id}/photos": "Get photos for a specific agent by ID",
            "/role/{role}": "Get all agents with the given role",
            "/generate-api-key": "Issue a new API key (requires x-admin-key)",
            "/ping": "Check if the server is running",
        },
        "example": {
            "list_agents": "/api/v1/agents",
            "single_agent": "/api/v1/agents/1",
            "all_photos": "/api/v1/agents/photos",
            "agent_photos": "/api/v1/agents/1/photos",
            "agents_by_role": "/role/duelist",
            "server_ping": "/ping",
        },
        "roles": roles,
        "auth": {
            "header": auth::API_KEY_HEADER,
            "public": auth::PUBLIC_PATHS,
        },
    }))
}

/// List all agents in the configured shape
pub async fn list_agents(State(state): State<ServerState>) -> impl IntoResponse {
    let agents = state.agents.list_all().to_vec();
    ApiResponse::ok(AgentList::new(state.list_shape, agents))
}

/// Get a single agent by id
pub async fn get_agent(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse, ApiResponse> {
    let id = parse_id(&path_segment(id)?)?;
    let agent = id
        .and_then(|id| state.agents.find_by_id(id))
        .ok_or_else(|| CatalogError::NotFound("Agent".to_string()))?;

    Ok(ApiResponse::ok(agent))
}

/// Every photo of every agent
pub async fn list_photos(State(state): State<ServerState>) -> impl IntoResponse {
    ApiResponse::ok(state.agents.list_photos())
}

/// Photos of a single agent
pub async fn agent_photos(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse, ApiResponse> {
    let id = parse_id(&path_segment(id)?)?;
    let photos = id
        .and_then(|id| state.agents.photos_for(id))
        .ok_or_else(|| CatalogError::NotFound("Agent".to_string()))?;

    Ok(ApiResponse::ok(photos))
}

/// Agents carrying a known role
pub async fn agents_by_role(
    State(state): State<ServerState>,
    role: Result<Path<String>, PathRejection>,
) -> Result<ApiResponse, ApiResponse> {
    let role: Role = path_segment(role)?.parse()?;
    Ok(ApiResponse::ok(state.agents.filter_by_role(role.as_str())))
}

/// Issue a new API key to a caller holding the admin secret
pub async fn generate_api_key(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> Result<ApiResponse, ApiResponse> {
    auth::check_admin(&state, &headers)?;

    let key = state.api_keys.issue().await?;
    info!("API key issued via admin endpoint");

    Ok(ApiResponse::ok(json!({ "apiKey": key })))
}

/// Uniform 404 for unmatched paths
pub async fn not_found() -> impl IntoResponse {
    ApiResponse::not_found("Endpoint not found")
}

/// Envelope for a known path requested with an unsupported method
pub async fn method_not_allowed() -> impl IntoResponse {
    ApiResponse::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Unwrap a path segment; undecodable segments are not a route match
fn path_segment(segment: Result<Path<String>, PathRejection>) -> Result<String, ApiResponse> {
    match segment {
        Ok(Path(value)) => Ok(value),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected path segment");
            Err(ApiResponse::not_found("Endpoint not found"))
        }
    }
}

/// Validate an `{id}` path segment.
///
/// Non-numeric segments are not a route match. Numeric segments too large
/// for an id yield `Ok(None)`, which callers report as an unknown agent.
fn parse_id(raw: &str) -> Result<Option<u64>, ApiResponse> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiResponse::not_found("Endpoint not found"));
    }
    Ok(raw.parse().ok())
}

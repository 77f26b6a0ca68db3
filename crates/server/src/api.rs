//! Response envelope and server state

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use agent_catalog_core::{AgentStore, ApiKeyStore, CatalogError, ListShape};

use crate::config::ServerConfig;

/// Uniform JSON envelope: `{success, data?, message?, ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Additional top-level fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope plus the status code it is sent with
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Envelope,
}

impl ApiResponse {
    /// 200 with `data`
    pub fn ok(data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                status: StatusCode::OK,
                body: Envelope {
                    success: true,
                    data: Some(value),
                    message: None,
                    extra: Map::new(),
                },
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response data");
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }

    /// 200 with only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Envelope {
                success: true,
                data: None,
                message: Some(message.into()),
                extra: Map::new(),
            },
        }
    }

    /// Failure envelope with `status`
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Envelope {
                success: false,
                data: None,
                message: Some(message.into()),
                extra: Map::new(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::error(StatusCode::FORBIDDEN, message)
    }

    /// Add a top-level field next to `success`
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.extra.insert(key.into(), value.into());
        self
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<CatalogError> for ApiResponse {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(what) => Self::not_found(format!("{} not found", what)),
            CatalogError::UnknownRole(_) => Self::not_found("Role not found"),
            CatalogError::Unauthorized => Self::forbidden("Invalid or missing API key"),
            CatalogError::Forbidden => Self::forbidden("Invalid admin key"),
            other => {
                tracing::error!(error = %other, "Request failed");
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// Server state
///
/// Shared state across all HTTP handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Loaded agent catalog, read-only
    pub agents: Arc<AgentStore>,

    /// Issued API keys
    pub api_keys: Arc<ApiKeyStore>,

    /// Secret guarding key issuance; `None` disables issuance
    pub admin_key: Option<Arc<str>>,

    /// Whether protected routes demand `x-api-key`
    pub require_api_key: bool,

    /// Shape of the agents-list payload
    pub list_shape: ListShape,
}

impl ServerState {
    /// Create a new server state
    pub fn new(agents: AgentStore, api_keys: ApiKeyStore, config: &ServerConfig) -> Self {
        Self {
            agents: Arc::new(agents),
            api_keys: Arc::new(api_keys),
            admin_key: config.admin_key.as_deref().map(Arc::from),
            require_api_key: config.require_api_key,
            list_shape: config.list_shape,
        }
    }
}

use thiserror::Error;

/// Errors that can occur during catalog and key operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Role name outside the known set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Missing or invalid API key
    #[error("Unauthorized")]
    Unauthorized,

    /// Admin secret mismatch
    #[error("Forbidden")]
    Forbidden,

    /// Backing document missing or unusable
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

//! Error types for the library API client.

/// Errors returned by the library API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Permission denied (403).
    #[error("permission denied")]
    PermissionDenied,

    /// Server returned an error status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No token was supplied for an endpoint that needs one.
    #[error("authentication required")]
    AuthRequired,

    /// Unauthorized (401).
    #[error("unauthorized")]
    Unauthorized,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the caller has to log in (again) before retrying.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Error::AuthRequired | Error::Unauthorized | Error::PermissionDenied
        )
    }
}

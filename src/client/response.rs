//! Tagged outcome of one API call, as the page consumes it.

use super::error::Error;

/// What a page needs to know about a finished request.
///
/// Transport failures, server errors and malformed payloads all collapse to
/// [`ApiResponse::Error`]; only authentication failures are kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Ok(T),
    LoginRequired,
    Error,
}

impl<T> ApiResponse<T> {
    /// Collapse a client result, logging what gets discarded.
    pub fn from_result(result: Result<T, Error>, endpoint: &str) -> Self {
        match result {
            Ok(value) => ApiResponse::Ok(value),
            Err(err) if err.is_auth() => {
                tracing::info!(endpoint, error = %err, "API requires login");
                ApiResponse::LoginRequired
            }
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "API request failed");
                ApiResponse::Error
            }
        }
    }
}

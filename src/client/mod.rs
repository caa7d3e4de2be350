//! Library API client
//!
//! Async client for the library management REST API, built on reqwest.
//! Every endpoint the catalog page uses requires a bearer token; calls made
//! without one fail with [`Error::AuthRequired`] before touching the network.

pub mod error;
pub mod query;
pub mod response;
pub mod types;
pub(crate) mod wire;

mod books;
mod categories;


use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::Error;
pub use query::{
    BookSearchRequest, BookSearchRequestBuilder, ParseSortOrderError, SortField, SortOrder,
};
pub use response::ApiResponse;
pub use types::*;

// ── Auth ────────────────────────────────────────────────────────────────────

/// Bearer credentials forwarded to the library API.
#[derive(Clone)]
struct Auth {
    token: String,
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

// ── Client ──────────────────────────────────────────────────────────────────

/// Async client for the library REST API.
///
/// Cloning is cheap: the underlying connection pool is shared, so the server
/// keeps one anonymous client and clones it per request with the caller's
/// token attached.
#[derive(Debug, Clone)]
pub struct LibraryClient {
    http: reqwest::Client,
    base_url: String,
    auth: Option<Auth>,
}

impl LibraryClient {
    /// Create a new client for the API rooted at `base_url`.
    pub fn new(user_agent: &str, base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth: None,
        })
    }

    /// Attach a bearer token.
    ///
    /// Returns `self` for builder-style chaining.
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Auth {
            token: token.into(),
        });
        self
    }

    /// Returns the auth token or `Error::AuthRequired`.
    pub(crate) fn require_auth(&self) -> Result<&str, Error> {
        self.auth
            .as_ref()
            .map(|a| a.token.as_str())
            .ok_or(Error::AuthRequired)
    }

    /// Map non-success HTTP status codes to typed errors.
    pub(crate) async fn check_status(
        resp: reqwest::Response,
        path: &str,
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(Error::NotFound(path.to_string()))
        } else if status == reqwest::StatusCode::UNAUTHORIZED {
            Err(Error::Unauthorized)
        } else if status == reqwest::StatusCode::FORBIDDEN {
            Err(Error::PermissionDenied)
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    /// Read the body and parse it, keeping payload errors apart from
    /// transport errors.
    pub(crate) async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET a JSON resource. Requires auth.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let token = self.require_auth()?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let resp = self.http.get(&url).bearer_auth(token).send().await?;
        let resp = Self::check_status(resp, path).await?;
        Self::decode(resp).await
    }

    /// POST a JSON body and return deserialized response. Requires auth.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let token = self.require_auth()?;
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        let resp = Self::check_status(resp, path).await?;
        Self::decode(resp).await
    }
}

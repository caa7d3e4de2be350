//! HTTP server for the catalog page
//!
//! `GET /category/{id}` runs a page load against the library API with the
//! visitor's token and answers with rendered HTML, or a redirect to the login
//! page when the API asks for authentication.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use serde::Deserialize;
use tower::limit::ConcurrencyLimitLayer;
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::trace::TraceLayer;

use crate::client::SortOrder;
use crate::page::{FilterChange, PageController};
use crate::render::{Rendered, render_page};
use crate::state::AppState;

/// Cookie the login page stores the API token in.
pub const TOKEN_COOKIE: &str = "token";

/// Middleware limits for the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct ServerLimits {
    pub request_timeout: Duration,
    pub max_concurrent: usize,
}

impl Default for ServerLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_concurrent: 64,
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>, limits: ServerLimits) -> Router {
    Router::new()
        .route("/category/{id}", get(category_page))
        .route("/category/{id}/", get(category_page))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(limits.request_timeout))
                .layer(ConcurrencyLimitLayer::new(limits.max_concurrent)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, router: Router) -> Result<(), BoxError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "catalog page listening");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("request timed out");
        (StatusCode::REQUEST_TIMEOUT, "request timed out".to_string())
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Filter values submitted by the search form.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl FilterQuery {
    /// The input edits this query stands for, in form order.
    pub fn changes(self) -> Vec<FilterChange> {
        let mut changes = Vec::new();
        if let Some(keywords) = self.keywords {
            changes.push(FilterChange::Keywords(keywords));
        }
        if let Some(title) = self.title {
            changes.push(FilterChange::Title(title));
        }
        if let Some(order) = self.order {
            match order.parse::<SortOrder>() {
                Ok(order) => changes.push(FilterChange::Order(order)),
                Err(err) => tracing::warn!(error = %err, "ignoring sort order"),
            }
        }
        changes
    }
}

async fn category_page(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<u32>,
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
) -> Response {
    let client = state.client_for(bearer_token(&headers));

    let mut page = PageController::new(category_id);
    for change in query.changes() {
        page.change_filter(change);
    }
    page.refresh(&client, state.config.items_per_page).await;

    match render_page(page.state(), category_id, &state.config) {
        Rendered::Redirect(to) => Redirect::to(&to).into_response(),
        Rendered::Html(html) => Html(html).into_response(),
    }
}

/// Token from `Authorization: Bearer …`, falling back to the token cookie.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = from_header {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn token_from_authorization_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));

        assert_eq!(bearer_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; token=xyz; lang=en"),
        );

        assert_eq!(bearer_token(&headers).as_deref(), Some("xyz"));
    }

    #[test]
    fn header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(header::COOKIE, HeaderValue::from_static("token=xyz"));

        assert_eq!(bearer_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn no_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("token="));

        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn unknown_order_is_skipped() {
        let query = FilterQuery {
            keywords: Some("sand".into()),
            title: None,
            order: Some("authors acs".into()),
        };

        assert_eq!(
            query.changes(),
            vec![FilterChange::Keywords("sand".into())]
        );
    }
}

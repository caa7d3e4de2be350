//! Internal wire types for serde deserialization.
//!
//! These types match the raw JSON structure from the library API
//! and are not exposed publicly.

use serde::{Deserialize, Serialize};

use super::types::BookRecord;

// ── Search wire types ───────────────────────────────────────────────────────

/// Raw body of a book search response.
///
/// A hit returns a bare array; a miss returns a status object whose
/// `statusCode` is 0.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchResponseRaw {
    Books(Vec<BookRecord>),
    Status(StatusResponse),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusResponse {
    pub status_code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request body for the book search endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookSearchBody<'a> {
    pub category_id: u32,
    pub keywords: &'a str,
    pub title: &'a str,
    pub authors: Vec<u32>,
    pub publication_year: u32,
    pub order_by: &'a str,
    pub order_direction: &'a str,
    pub page: u32,
    pub items_per_page: u32,
}

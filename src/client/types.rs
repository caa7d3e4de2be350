//! Public data types for the library API.

use serde::{Deserialize, Deserializer};

// ── Core types ──────────────────────────────────────────────────────────────

/// A book category from `GET /api/category/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: u32,
    pub name: String,
}

/// Which side of the book a photo shows.
///
/// The API only ever distinguishes `"front"`; anything else, including a
/// missing or null `cover`, is treated as the back cover.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cover {
    Front,
    #[default]
    #[serde(other)]
    Back,
}

/// A cover photo attached to a book record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default)]
    pub photo_id: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover: Cover,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_path: String,
}

/// A book as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub book_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publication_year: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub catalog_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Response types ──────────────────────────────────────────────────────────

/// Result of `POST /api/book/search/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// One page of matching books.
    Books(Vec<BookRecord>),
    /// The API reported nothing matched.
    NoResults,
}

impl SearchOutcome {
    /// Books on this page, empty for [`SearchOutcome::NoResults`].
    pub fn into_books(self) -> Vec<BookRecord> {
        match self {
            SearchOutcome::Books(books) => books,
            SearchOutcome::NoResults => Vec::new(),
        }
    }
}

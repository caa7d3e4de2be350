//! Query builder for book search.

use std::fmt;
use std::str::FromStr;

use super::wire::BookSearchBody;

/// Column the search results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Year,
}

impl SortField {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Year => "year",
        }
    }
}

/// Sort order offered by the filter form.
///
/// The textual form is `"<field> <direction>"`, e.g. `"title asc"`, which is
/// also what the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    TitleAsc,
    TitleDesc,
    YearAsc,
    YearDesc,
}

impl SortOrder {
    /// Every order, in the sequence the form lists them.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::YearAsc,
        SortOrder::YearDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::TitleAsc => "title asc",
            SortOrder::TitleDesc => "title desc",
            SortOrder::YearAsc => "year asc",
            SortOrder::YearDesc => "year desc",
        }
    }

    /// Human label for the select option.
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::TitleAsc => "Sort by Title - asc",
            SortOrder::TitleDesc => "Sort by Title - desc",
            SortOrder::YearAsc => "Sort by Publication year - asc",
            SortOrder::YearDesc => "Sort by Publication year - desc",
        }
    }

    pub fn field(&self) -> SortField {
        match self {
            SortOrder::TitleAsc | SortOrder::TitleDesc => SortField::Title,
            SortOrder::YearAsc | SortOrder::YearDesc => SortField::Year,
        }
    }

    /// `orderBy` value sent to the API.
    pub fn order_by(&self) -> &'static str {
        self.field().as_str()
    }

    /// `orderDirection` value sent to the API (upper case).
    pub fn direction(&self) -> &'static str {
        match self {
            SortOrder::TitleAsc | SortOrder::YearAsc => "ASC",
            SortOrder::TitleDesc | SortOrder::YearDesc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort order string that is not one of [`SortOrder::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0:?}")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let field = parts.next().map(str::to_ascii_lowercase);
        let direction = parts.next().map(str::to_ascii_lowercase);
        if parts.next().is_some() {
            return Err(ParseSortOrderError(s.to_string()));
        }
        match (field.as_deref(), direction.as_deref()) {
            (Some("title"), Some("asc")) => Ok(SortOrder::TitleAsc),
            (Some("title"), Some("desc")) => Ok(SortOrder::TitleDesc),
            (Some("year"), Some("asc")) => Ok(SortOrder::YearAsc),
            (Some("year"), Some("desc")) => Ok(SortOrder::YearDesc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Parameters for `POST /api/book/search/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSearchRequest {
    pub(crate) category_id: u32,
    pub(crate) keywords: String,
    pub(crate) title: String,
    pub(crate) order: SortOrder,
    pub(crate) page: u32,
    pub(crate) items_per_page: u32,
}

impl BookSearchRequest {
    pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

    /// Create a new request builder for the given category.
    pub fn builder(category_id: u32) -> BookSearchRequestBuilder {
        BookSearchRequestBuilder {
            request: BookSearchRequest {
                category_id,
                keywords: String::new(),
                title: String::new(),
                order: SortOrder::default(),
                page: 0,
                items_per_page: Self::DEFAULT_ITEMS_PER_PAGE,
            },
        }
    }

    pub(crate) fn body(&self) -> BookSearchBody<'_> {
        BookSearchBody {
            category_id: self.category_id,
            keywords: &self.keywords,
            title: &self.title,
            authors: Vec::new(),
            publication_year: 0,
            order_by: self.order.order_by(),
            order_direction: self.order.direction(),
            page: self.page,
            items_per_page: self.items_per_page,
        }
    }
}

/// Builder for [`BookSearchRequest`].
#[derive(Debug)]
pub struct BookSearchRequestBuilder {
    request: BookSearchRequest,
}

impl BookSearchRequestBuilder {
    pub fn keywords(mut self, keywords: &str) -> Self {
        self.request.keywords = keywords.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.request.title = title.to_string();
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.request.order = order;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.request.page = page;
        self
    }

    pub fn items_per_page(mut self, items_per_page: u32) -> Self {
        self.request.items_per_page = items_per_page;
        self
    }

    pub fn build(self) -> BookSearchRequest {
        self.request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_order() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>(), Ok(order));
        }
    }

    #[test]
    fn parse_is_case_and_whitespace_tolerant() {
        assert_eq!("  Title   DESC ".parse::<SortOrder>(), Ok(SortOrder::TitleDesc));
    }

    #[test]
    fn rejects_unlisted_orders() {
        for bad in ["authors acs", "title", "", "title asc extra", "year sideways"] {
            assert!(bad.parse::<SortOrder>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn title_desc_splits_into_field_and_upper_direction() {
        let body_json = serde_json::to_value(
            BookSearchRequest::builder(7)
                .order(SortOrder::TitleDesc)
                .build()
                .body(),
        )
        .unwrap();

        assert_eq!(body_json["orderBy"], "title");
        assert_eq!(body_json["orderDirection"], "DESC");
    }

    #[test]
    fn body_carries_fixed_fields() {
        let request = BookSearchRequest::builder(3)
            .keywords("sand")
            .title("Dune")
            .order(SortOrder::YearAsc)
            .build();
        let body_json = serde_json::to_value(request.body()).unwrap();

        assert_eq!(
            body_json,
            serde_json::json!({
                "categoryId": 3,
                "keywords": "sand",
                "title": "Dune",
                "authors": [],
                "publicationYear": 0,
                "orderBy": "year",
                "orderDirection": "ASC",
                "page": 0,
                "itemsPerPage": 10
            })
        );
    }
}

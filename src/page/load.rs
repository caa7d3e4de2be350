//! Fetching a category page and folding the responses into one patch.

use crate::client::{ApiResponse, BookSearchRequest, Category, LibraryClient, SearchOutcome};

use super::book::Book;
use super::state::{Filters, PagePatch};

/// Shown when the category metadata could not be fetched.
pub const CATEGORY_ERROR_MESSAGE: &str = "Please wait...or try to refresh";
/// Shown when the book search could not be run.
pub const SEARCH_ERROR_MESSAGE: &str = "Request Error";

/// Patch produced by the category response alone.
pub fn category_patch(response: ApiResponse<Category>) -> PagePatch {
    match response {
        ApiResponse::Ok(category) => PagePatch {
            category: Some(category),
            ..PagePatch::default()
        },
        ApiResponse::LoginRequired => PagePatch {
            is_logged_in: Some(false),
            ..PagePatch::default()
        },
        ApiResponse::Error => PagePatch {
            message: Some(CATEGORY_ERROR_MESSAGE.to_string()),
            ..PagePatch::default()
        },
    }
}

/// Patch produced by the search response alone.
pub fn search_patch(response: ApiResponse<SearchOutcome>) -> PagePatch {
    match response {
        ApiResponse::Ok(outcome) => {
            let books: Vec<Book> = outcome.into_books().into_iter().map(Book::from).collect();
            if books.is_empty() {
                PagePatch {
                    books: Some(Vec::new()),
                    message: Some(String::new()),
                    ..PagePatch::default()
                }
            } else {
                PagePatch {
                    books: Some(books),
                    ..PagePatch::default()
                }
            }
        }
        ApiResponse::LoginRequired => PagePatch {
            is_logged_in: Some(false),
            ..PagePatch::default()
        },
        ApiResponse::Error => PagePatch {
            message: Some(SEARCH_ERROR_MESSAGE.to_string()),
            ..PagePatch::default()
        },
    }
}

/// Fold both responses. The search response is applied after the category
/// response, so it wins where they overlap.
pub fn fold_responses(
    category: ApiResponse<Category>,
    search: ApiResponse<SearchOutcome>,
) -> PagePatch {
    category_patch(category).then(search_patch(search))
}

/// Fetch category metadata and one page of matching books concurrently.
#[tracing::instrument(skip(client, filters), fields(order = %filters.order))]
pub async fn load(
    client: &LibraryClient,
    category_id: u32,
    filters: &Filters,
    items_per_page: u32,
) -> PagePatch {
    let request = BookSearchRequest::builder(category_id)
        .keywords(&filters.keywords)
        .title(&filters.title)
        .order(filters.order)
        .items_per_page(items_per_page)
        .build();

    let (category, search) = tokio::join!(
        client.category(category_id),
        client.search_books(&request)
    );

    let category = ApiResponse::from_result(category, "category");
    let search = ApiResponse::from_result(search, "book search");
    tracing::debug!(
        category_ok = matches!(category, ApiResponse::Ok(_)),
        search_ok = matches!(search, ApiResponse::Ok(_)),
        "category page loaded"
    );

    fold_responses(category, search)
}

//! Book search endpoint.

use super::LibraryClient;
use super::error::Error;
use super::query::BookSearchRequest;
use super::types::SearchOutcome;
use super::wire::SearchResponseRaw;

impl LibraryClient {
    /// Search the books of one category.
    ///
    /// Requires authentication. A status body with `statusCode == 0` means
    /// nothing matched; any other status body is reported as an API error.
    pub async fn search_books(&self, request: &BookSearchRequest) -> Result<SearchOutcome, Error> {
        let raw: SearchResponseRaw = self.post_json("/api/book/search/", &request.body()).await?;

        match raw {
            SearchResponseRaw::Books(books) => Ok(SearchOutcome::Books(books)),
            SearchResponseRaw::Status(status) if status.status_code == 0 => {
                Ok(SearchOutcome::NoResults)
            }
            SearchResponseRaw::Status(status) => Err(Error::Api {
                status: 200,
                message: status
                    .message
                    .unwrap_or_else(|| format!("status code {}", status.status_code)),
            }),
        }
    }
}

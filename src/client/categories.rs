//! Category-related API endpoints.

use super::LibraryClient;
use super::error::Error;
use super::types::Category;

impl LibraryClient {
    /// Get a single category by id.
    ///
    /// Requires authentication.
    pub async fn category(&self, category_id: u32) -> Result<Category, Error> {
        self.get_json(&format!("/api/category/{category_id}")).await
    }
}

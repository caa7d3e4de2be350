//! Site configuration shared by the loader, the renderer and the server.

use crate::client::BookSearchRequest;

/// Settings that shape how the catalog page talks to the API and links out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Root of the library API, e.g. `http://localhost:3000`.
    pub api_base_url: String,
    /// Base URL cover images are served from; the size folder and the stored
    /// relative path are appended to it.
    pub photo_path: String,
    /// Where unauthenticated visitors are sent.
    pub login_path: String,
    pub items_per_page: u32,
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            photo_path: "http://localhost:3000/assets/photos/".to_string(),
            login_path: "/login".to_string(),
            items_per_page: BookSearchRequest::DEFAULT_ITEMS_PER_PAGE,
            user_agent: concat!("catalog-web/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SiteConfig {
    /// Full URL of a cover image in the given size folder.
    pub fn photo_url(&self, size: &str, image_path: &str) -> String {
        format!("{}{}/{}", self.photo_path, size, image_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_url_concatenates_base_size_and_path() {
        let config = SiteConfig {
            photo_path: "https://cdn.example.org/photos/".into(),
            ..SiteConfig::default()
        };

        assert_eq!(
            config.photo_url("small", "a.jpg"),
            "https://cdn.example.org/photos/small/a.jpg"
        );
    }

    #[test]
    fn defaults_page_ten_books() {
        assert_eq!(SiteConfig::default().items_per_page, 10);
        assert_eq!(SiteConfig::default().login_path, "/login");
    }
}

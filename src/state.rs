//! Shared application state

use crate::client::{self, LibraryClient};
use crate::config::SiteConfig;

/// Shared state for the web server
#[derive(Debug)]
pub struct AppState {
    /// Anonymous library API client; cloned per request with the caller's token
    pub client: LibraryClient,
    pub config: SiteConfig,
}

impl AppState {
    /// Create new application state
    pub fn new(config: SiteConfig) -> Result<Self, client::Error> {
        let client = LibraryClient::new(&config.user_agent, &config.api_base_url)?;
        Ok(Self { client, config })
    }

    /// API client carrying the visitor's token, if they sent one.
    pub fn client_for(&self, token: Option<String>) -> LibraryClient {
        match token {
            Some(token) => self.client.clone().with_auth(token),
            None => self.client.clone(),
        }
    }
}

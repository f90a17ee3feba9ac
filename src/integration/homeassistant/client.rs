//! Home Assistant Client.
//! This client is the higher level API client for Home Assistant.

use super::Result;
use super::http_client::HttpClient;
use super::schemas::StateCreateOrUpdate;
use reqwest::Url;

pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Creates a new instance of `Client`.
    pub fn new(url: Url, token: String) -> Self {
        let http = HttpClient::new(url, token);
        Client { http }
    }

    /// Create or update the state of an entity in Home Assistant.
    pub async fn set_state(&self, entity_id: &str, state: &StateCreateOrUpdate) -> Result<()> {
        self.http.set_state(entity_id, state).await?;
        log::debug!("Updated {entity_id} in Home Assistant: {}", state.state);
        Ok(())
    }
}

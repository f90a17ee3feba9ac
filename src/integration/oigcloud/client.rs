//! OIG Cloud Client.
//! This client is the higher level API client for OIG Cloud.
use super::Result;
use super::http_client::HttpClient;
use super::schemas::Stats;
use reqwest::Url;

pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Creates a new instance of `Client`.
    pub fn new(url: Url, username: String, password: String) -> Self {
        let http = HttpClient::new(url, username, password);
        Client { http }
    }

    /// Login to OIG Cloud.
    /// No operation is performed if already logged in.
    pub async fn login(&self) -> Result<()> {
        self.http.login(false).await
    }

    pub async fn is_logged_in(&self) -> bool {
        self.http.is_logged_in().await
    }

    /// Logout from OIG Cloud.
    /// Return `true` if a session was dropped, `false` otherwise.
    pub async fn logout(&self) -> bool {
        self.http.logout().await
    }

    /// Get the current stats of every box of the account.
    /// Logs in first when there is no session.
    pub async fn get_stats(&self) -> Result<Stats> {
        let stats = self.http.get_stats().await?;
        if stats.is_empty() {
            log::warn!("OIG Cloud returned no box for this account");
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_new() {
        let url = Url::parse("http://localhost:8080/cez/").unwrap();
        let client = Client::new(url, "user@example.com".into(), "password".into());
        assert!(!client.is_logged_in().await);
        assert!(!client.logout().await);
    }
}

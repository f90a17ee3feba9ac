//! OIG Cloud HTTP client.
//! This is the lower level client for OIG Cloud. It owns the `PHPSESSID` session.

use failsafe::{
    backoff::{self, Constant},
    failure_policy::{self, ConsecutiveFailures},
    futures::CircuitBreaker,
};
use reqwest::{Client, StatusCode, Url};
use serde_json::{Value, json};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use super::schemas::Stats;
use super::{Error, Result};

static LOGIN_PATH: &str = "inc/php/scripts/Login.php";
static STATS_PATH: &str = "json.php";
static SESSION_COOKIE: &str = "PHPSESSID";
static LOGIN_SUCCESS: &str = r#"[[2,"",false]]"#;

pub struct HttpClient {
    client: Client,
    username: String,
    password: String,
    base_url: Url,
    session: RwLock<Option<String>>,
    circuit_breaker: failsafe::StateMachine<ConsecutiveFailures<Constant>, ()>,
}

impl HttpClient {
    /// Creates a new instance of `HttpClient`.
    pub fn new(url: Url, username: String, password: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(1)
            .timeout(Duration::from_secs(10)) // the cloud is slow at times
            .build()
            .expect("Failed to create HTTP client");
        HttpClient {
            client,
            username,
            password,
            base_url: url,
            session: RwLock::new(None),
            circuit_breaker: Self::circuit_breaker(),
        }
    }

    /// Login to OIG Cloud.
    /// If `force` is false and a session already exists, no request is sent.
    pub async fn login(&self, force: bool) -> Result<()> {
        RetryIf::spawn(
            Self::retry_strategy(),
            || async {
                self.circuit_breaker
                    .call_with(Self::is_recorded_error, self.refresh_session(force))
                    .await
                    .map_err(|err| match err {
                        failsafe::Error::Rejected => Error::RequestRejected,
                        failsafe::Error::Inner(e) => e,
                    })
            },
            Self::is_retryable_error,
        )
        .await?;
        Ok(())
    }

    /// Returns `true` if a session is held.
    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Drop the session. Returns `true` if a session was held.
    pub async fn logout(&self) -> bool {
        self.session.write().await.take().is_some()
    }

    /// Fetch the current stats of all boxes.
    pub async fn get_stats(&self) -> Result<Stats> {
        RetryIf::spawn(
            Self::retry_strategy(),
            || async {
                self.circuit_breaker
                    .call_with(Self::is_recorded_error, self.request_stats())
                    .await
                    .map_err(|err| match err {
                        failsafe::Error::Rejected => Error::RequestRejected,
                        failsafe::Error::Inner(e) => e,
                    })
            },
            Self::is_retryable_error,
        )
        .await
    }

    /// Refresh the session and return its id.
    /// If `force` is true, a new session is requested even if one is already held.
    async fn refresh_session(&self, force: bool) -> Result<String> {
        let mut session_write = self.session.write().await;
        if let (Some(session), false) = (session_write.as_ref(), force) {
            return Ok(session.clone());
        }
        let session = self.request_login().await?;
        *session_write = session.clone();
        session.ok_or(Error::WrongCredentials)
    }

    /// Get the session if it exists, otherwise login.
    async fn get_session(&self) -> Result<String> {
        if let Some(session) = self.session.read().await.as_ref() {
            return Ok(session.clone());
        }
        self.refresh_session(false).await
    }

    /// Clear the session if it matches the provided one.
    async fn clear_session(&self, session: &str) {
        let mut session_write = self.session.write().await;
        if session_write.as_deref() == Some(session) {
            *session_write = None;
        }
    }

    /// Internal method to request a login and retrieve the session id.
    async fn request_login(&self) -> Result<Option<String>> {
        log::debug!("Sending login request for '{}'", self.username);
        let url = self
            .base_url
            .join(LOGIN_PATH)
            .expect("cannot build login URL");
        let body = json!({ "email": self.username, "password": self.password });
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let session = response
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.value().to_string());
        let text = response.text().await?;
        match session {
            Some(session) if text.trim() == LOGIN_SUCCESS => {
                log::debug!("Login successful");
                Ok(Some(session))
            }
            _ => {
                log::debug!("Login failed: {text}");
                Ok(None)
            }
        }
    }

    /// Internal method to fetch the stats with the current session.
    async fn request_stats(&self) -> Result<Stats> {
        let session = self.get_session().await?;
        let url = self
            .base_url
            .join(STATS_PATH)
            .expect("cannot build stats URL");
        log::debug!("Sending stats request");
        let text = self
            .client
            .get(url)
            .header("Cookie", format!("{SESSION_COOKIE}={session}"))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        log::debug!("Stats result: {text}");
        match serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(Stats::from_value)
        {
            Some(stats) => Ok(stats),
            None => {
                log::debug!("Unexpected stats response, clearing session");
                self.clear_session(&session).await;
                Err(Error::SessionExpired)
            }
        }
    }

    /// Creates a circuit breaker with a failure policy that allows up to 3 consecutive failures and will retry after 60 seconds.
    fn circuit_breaker() -> failsafe::StateMachine<ConsecutiveFailures<Constant>, ()> {
        let backoff = backoff::constant(Duration::from_secs(60));
        let policy = failure_policy::consecutive_failures(3, backoff);
        failsafe::Config::new().failure_policy(policy).build()
    }

    /// Create a retry strategy with exponential backoff starting at 10 milliseconds, with jitter, and a maximum of 3 retries.
    fn retry_strategy() -> impl Iterator<Item = Duration> {
        ExponentialBackoff::from_millis(10).map(jitter).take(3)
    }

    /// Check if the error is a HTTP 4xx client error.
    fn is_client_error(error: &reqwest::Error) -> bool {
        error
            .status()
            .map(|status_code| StatusCode::is_client_error(&status_code))
            .unwrap_or(false)
    }

    // Predicate function for the retry strategy to determine if an error is retryable.
    fn is_retryable_error(error: &Error) -> bool {
        match error {
            Error::RequestFailed(err) => !HttpClient::is_client_error(err),
            Error::WrongCredentials => false,
            Error::SessionExpired => true, // next attempt logs in again
            Error::RequestRejected => false,
        }
    }

    /// Predicate function for the circuit breaker to record errors that are not client errors.
    fn is_recorded_error(error: &Error) -> bool {
        match error {
            Error::RequestFailed(err) => !HttpClient::is_client_error(err),
            Error::WrongCredentials => false,
            Error::SessionExpired => false,
            Error::RequestRejected => false,
        }
    }
}

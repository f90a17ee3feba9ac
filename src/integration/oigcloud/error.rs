//! Error handling for the OIG Cloud client.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Authentication failed: wrong username or password")]
    WrongCredentials,
    #[error("Session expired: stats response is not a JSON object")]
    SessionExpired,
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Request rejected by the circuit breaker")]
    RequestRejected,
}

pub type Result<T> = std::result::Result<T, Error>;

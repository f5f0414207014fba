pub use reqwest::StatusCode;
use thiserror::Error;

/// An error that can occur while fetching referrals from the backend.
#[derive(Error, Debug)]
pub enum ReferralError {
    /// The request never produced a response (DNS, refused connection, etc).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
    /// The response body is not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured base URL cannot be combined with the endpoint path.
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),
}

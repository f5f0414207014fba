//! Where the referrals endpoint lives.

use std::env;

use reqwest::Url;

use crate::error::ReferralError;

/// Path of the referrals endpoint, relative to the backend base URL.
pub const REFERRALS_PATH: &str = "/api/referrals";

/// Name of the query parameter carrying the user identifier.
pub const USER_ID_PARAM: &str = "userId";

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Base URL of the backend serving the referrals endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: Url,
}

impl EndpointConfig {
    /// Creates a config from a base URL such as `https://example.com`.
    pub fn new(base_url: &str) -> Result<Self, ReferralError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ReferralError::InvalidEndpoint(e.to_string()))?;
        Ok(Self { base_url })
    }

    /// Reads the base URL from the environment.
    ///
    /// # Environment Variables
    /// - `REFERRALS_API_URL`: backend base URL. Defaults to
    ///   [`DEFAULT_BASE_URL`]; an unparseable value is logged and ignored.
    pub fn from_env() -> Self {
        match env::var("REFERRALS_API_URL") {
            Ok(val) => Self::new(&val).unwrap_or_else(|e| {
                dioxus_logger::tracing::warn!(
                    "ignoring REFERRALS_API_URL={val:?}: {e}; using {DEFAULT_BASE_URL}"
                );
                Self::fallback()
            }),
            Err(_) => Self::fallback(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the referrals endpoint, without query string.
    pub fn referrals_url(&self) -> Result<Url, ReferralError> {
        self.base_url
            .join(REFERRALS_PATH)
            .map_err(|e| ReferralError::InvalidEndpoint(e.to_string()))
    }

    fn fallback() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

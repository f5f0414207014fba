//! Defines the trait and HTTP implementation for fetching a user's referrals.

use async_trait::async_trait;

use crate::config::EndpointConfig;
use crate::config::USER_ID_PARAM;
use crate::error::ReferralError;
use crate::referral::Referral;
use crate::referral::ReferralsResponse;

/// A trait for any service that can list the referrals of a user.
///
/// Futures are not required to be `Send`: in the browser the transport is
/// built on JS promises, and the UI holds sources as `Rc<dyn ReferralSource>`.
#[async_trait(?Send)]
pub trait ReferralSource {
    /// Fetches the referrals of `user_id`, in backend order.
    async fn referrals(&self, user_id: &str) -> Result<Vec<Referral>, ReferralError>;
}

/// Fetches referrals from `GET /api/referrals?userId=<id>`.
#[derive(Clone, Debug)]
pub struct HttpReferralSource {
    client: reqwest::Client,
    config: EndpointConfig,
}

impl HttpReferralSource {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl ReferralSource for HttpReferralSource {
    async fn referrals(&self, user_id: &str) -> Result<Vec<Referral>, ReferralError> {
        let url = self.config.referrals_url()?;
        dioxus_logger::tracing::debug!("GET {url} for user {user_id}");

        let resp = self
            .client
            .get(url)
            .query(&[(USER_ID_PARAM, user_id)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ReferralError::Status(status));
        }

        // decoded separately so a bad body is reported as such, not as a transport error
        let body = resp.bytes().await?;
        let response: ReferralsResponse = serde_json::from_slice(&body)?;

        Ok(response.into_referrals())
    }
}

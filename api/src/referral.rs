//! Referral records as returned by the referrals endpoint.

use serde::Deserialize;

use crate::referral_date::ReferralDate;
use crate::reward_amount::RewardAmount;

/// One user who signed up through the current user's referral.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: ReferralDate,
    pub rewards: RewardAmount,
}

impl Referral {
    /// "First Last", as shown in the User column.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `GET /api/referrals`.
///
/// A missing or `null` `referrals` field means the user has no referrals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReferralsResponse {
    #[serde(default)]
    pub referrals: Option<Vec<Referral>>,
}

impl ReferralsResponse {
    pub fn into_referrals(self) -> Vec<Referral> {
        self.referrals.unwrap_or_default()
    }
}

//! This crate contains the referral data model and the client side of the
//! referrals endpoint.

pub mod config;
pub mod error;
pub mod referral;
pub mod referral_date;
pub mod referral_source;
pub mod reward_amount;

pub use config::EndpointConfig;
pub use error::ReferralError;
pub use referral::Referral;
pub use referral_source::HttpReferralSource;
pub use referral_source::ReferralSource;

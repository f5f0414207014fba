pub mod use_referrals;

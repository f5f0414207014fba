//=============================================================================
// File: src/hooks/use_referrals.rs
//=============================================================================
use api::Referral;
use api::ReferralSource;
use dioxus::prelude::*;

use crate::app_state::AppState;

/// Fetches the referrals of `user_id`, folding every failure into an empty list.
///
/// A missing identifier and a failed request are both logged and otherwise
/// treated as "no referrals"; nothing is retried.
pub async fn load_referrals(source: &dyn ReferralSource, user_id: Option<&str>) -> Vec<Referral> {
    let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
        dioxus_logger::tracing::error!("User not authenticated");
        return Vec::new();
    };

    match source.referrals(user_id).await {
        Ok(referrals) => {
            dioxus_logger::tracing::info!("loaded {} referrals", referrals.len());
            referrals
        }
        Err(e) => {
            dioxus_logger::tracing::error!("Error fetching referral data: {e}");
            Vec::new()
        }
    }
}

/// Starts the referral fetch when the calling component mounts.
///
/// The resource reads `None` while the request is in flight. `user_id` is
/// captured on the first render only, so later prop changes and re-renders
/// never trigger another request. The task belongs to the caller's scope and
/// is dropped with it on unmount.
pub fn use_referrals(user_id: Option<String>) -> Resource<Vec<Referral>> {
    let app_state = use_context::<AppState>();
    let user_id = use_hook(|| user_id);

    use_resource(move || {
        let source = app_state.referral_source.clone();
        let user_id = user_id.clone();
        async move { load_referrals(source.as_ref(), user_id.as_deref()).await }
    })
}

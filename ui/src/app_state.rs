use api::ReferralSource;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

pub struct AppStateData {
    /// Where widgets fetch referrals from.
    pub referral_source: Rc<dyn ReferralSource>,
}

impl fmt::Debug for AppStateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStateData").finish_non_exhaustive()
    }
}

/// Stable, non-reactive application state, provided as a Dioxus context.
#[derive(Clone, Debug)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(referral_source: Rc<dyn ReferralSource>) -> Self {
        Self(Rc::new(AppStateData { referral_source }))
    }
}

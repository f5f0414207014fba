//! Access to the authenticated user's session.

use crate::compat;

/// Session store key under which the login flow stashes the user identifier.
pub const AUTH_SESSION_KEY: &str = "auth-session";

/// Returns the identifier of the logged-in user, if any.
///
/// An empty value counts as logged out.
pub fn current_user_id() -> Option<String> {
    compat::session_get(AUTH_SESSION_KEY).filter(|id| !id.is_empty())
}

/// Records `user_id` as the logged-in user for the rest of the session.
pub fn set_current_user_id(user_id: &str) -> bool {
    compat::session_set(AUTH_SESSION_KEY, user_id)
}

pub fn clear_current_user_id() -> bool {
    compat::session_remove(AUTH_SESSION_KEY)
}

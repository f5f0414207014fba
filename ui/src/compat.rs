// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::EndpointConfig;
    use web_sys::Storage;
    use web_sys::Window;

    fn session_storage() -> Option<Storage> {
        web_sys::window()?.session_storage().ok()?
    }

    /// Reads `key` from the browser's `sessionStorage`.
    pub fn session_get(key: &str) -> Option<String> {
        session_storage()?.get_item(key).ok()?
    }

    pub fn session_set(key: &str, value: &str) -> bool {
        session_storage()
            .map(|storage| storage.set_item(key, value).is_ok())
            .unwrap_or(false)
    }

    pub fn session_remove(key: &str) -> bool {
        session_storage()
            .map(|storage| storage.remove_item(key).is_ok())
            .unwrap_or(false)
    }

    /// The backend is served from the same origin as the page.
    pub fn endpoint_config() -> EndpointConfig {
        let origin = web_sys::window().and_then(|win: Window| win.location().origin().ok());
        match origin.map(|origin| EndpointConfig::new(&origin)) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                dioxus_logger::tracing::warn!("unusable page origin: {e}");
                EndpointConfig::default()
            }
            None => EndpointConfig::default(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::collections::HashMap;
    use std::sync::LazyLock;
    use std::sync::RwLock;

    use api::EndpointConfig;

    /// Process-wide stand-in for the browser's `sessionStorage`.
    static SESSION: LazyLock<RwLock<HashMap<String, String>>> = LazyLock::new(Default::default);

    pub fn session_get(key: &str) -> Option<String> {
        SESSION.read().ok()?.get(key).cloned()
    }

    pub fn session_set(key: &str, value: &str) -> bool {
        match SESSION.write() {
            Ok(mut session) => {
                session.insert(key.to_string(), value.to_string());
                true
            }
            Err(_) => false,
        }
    }

    pub fn session_remove(key: &str) -> bool {
        match SESSION.write() {
            Ok(mut session) => session.remove(key).is_some(),
            Err(_) => false,
        }
    }

    /// Reads the backend location from `REFERRALS_API_URL`.
    pub fn endpoint_config() -> EndpointConfig {
        EndpointConfig::from_env()
    }
}

// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
pub mod components;
pub mod hooks;
mod screens;
pub mod session;
#[cfg(test)]
mod test_support;

use std::rc::Rc;

use api::HttpReferralSource;
use app_state::AppState;
use components::pico::Container;
use screens::overview::OverviewScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    /* --- APP FRAME --- */
    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-main-container .content {
        padding: 0 1rem;
    }

    /* --- REFERRALS TABLE --- */
    .referral-row td { transition: background-color 0.15s ease-in-out; }
    .sort-indicator { margin-left: 0.25rem; font-size: 0.75em; opacity: 0.6; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Wires the HTTP referral source into context and lays out the dashboard.
#[component]
fn AppBody() -> Element {
    let endpoint = use_hook(|| {
        let endpoint = compat::endpoint_config();
        dioxus_logger::tracing::info!("referrals endpoint: {}", endpoint.base_url());
        endpoint
    });

    use_context_provider(|| AppState::new(Rc::new(HttpReferralSource::new(endpoint.clone()))));

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Dashboard" }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    OverviewScreen {}
                }
            }
        }
    }
}

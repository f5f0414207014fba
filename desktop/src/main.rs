use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    // There is no browser session on the desktop; `AUTH_SESSION` plays the
    // part of the identifier a web login would have stored.
    match std::env::var("AUTH_SESSION") {
        Ok(user_id) if !user_id.is_empty() => {
            ui::session::set_current_user_id(&user_id);
        }
        _ => dioxus_logger::tracing::warn!("AUTH_SESSION not set; no user is logged in"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}

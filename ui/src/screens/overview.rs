//=============================================================================
// File: src/screens/overview.rs
//=============================================================================
use crate::components::latest_referrals::LatestReferrals;
use crate::session;
use dioxus::prelude::*;

/// The dashboard landing screen.
///
/// Looks up the logged-in user once and hands the identifier to the widgets,
/// so none of them read the session store themselves.
#[allow(non_snake_case)]
#[component]
pub fn OverviewScreen() -> Element {
    let user_id = use_hook(session::current_user_id);

    rsx! {
        LatestReferrals {
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::app_state::AppState;
    use crate::components::latest_referrals::LOADING_TEXT;
    use crate::test_support::ann_lee;
    use crate::test_support::lock_session;
    use crate::test_support::pump;
    use crate::test_support::Outcome;
    use crate::test_support::StubSource;

    #[derive(Props, Clone)]
    struct ScreenProps {
        source: Rc<StubSource>,
    }

    impl PartialEq for ScreenProps {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.source, &other.source)
        }
    }

    #[allow(non_snake_case)]
    fn Screen(props: ScreenProps) -> Element {
        use_context_provider(|| AppState::new(props.source.clone()));
        rsx! { OverviewScreen {} }
    }

    /// Mounts the screen with the session store holding `user_id`. The store
    /// is only read during the first render, so it is restored right after.
    fn mount_with_session(source: Rc<StubSource>, user_id: Option<&str>) -> VirtualDom {
        let _session = lock_session();
        match user_id {
            Some(id) => session::set_current_user_id(id),
            None => session::clear_current_user_id(),
        };
        let mut dom = VirtualDom::new_with_props(Screen, ScreenProps { source });
        dom.rebuild_in_place();
        session::clear_current_user_id();
        dom
    }

    async fn settle(dom: &mut VirtualDom) -> String {
        for _ in 0..20 {
            if !dioxus_ssr::render(dom).contains(LOADING_TEXT) {
                break;
            }
            pump(dom).await;
        }
        dioxus_ssr::render(dom)
    }

    #[tokio::test]
    async fn fetches_for_user_in_session() {
        let source = StubSource::new(Outcome::Referrals(vec![ann_lee()]));
        let mut dom = mount_with_session(source.clone(), Some("u7"));

        let html = settle(&mut dom).await;

        assert!(html.contains("Ann Lee"));
        assert_eq!(source.seen(), vec!["u7".to_string()]);
    }

    #[tokio::test]
    async fn no_session_key_renders_empty_table_without_request() {
        let source = StubSource::new(Outcome::Referrals(vec![ann_lee()]));
        let mut dom = mount_with_session(source.clone(), None);

        let html = settle(&mut dom).await;

        assert!(!html.contains(LOADING_TEXT));
        assert!(html.contains("<table"));
        assert!(!html.contains("Ann Lee"));
        assert_eq!(source.calls(), 0);
    }
}

//=============================================================================
// File: src/components/latest_referrals.rs
//=============================================================================
use api::Referral;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_referrals::use_referrals;

pub const LOADING_TEXT: &str = "Loading latest referrals...";

/// A single row of the referrals table, with its own hover state.
#[component]
fn ReferralRow(referral: Referral) -> Element {
    let mut is_hovered = use_signal(|| false);

    let (class, row_style) = if is_hovered() {
        (
            "referral-row hovered",
            "background-color: var(--pico-table-row-stripped-background-color);",
        )
    } else {
        ("referral-row", "")
    };

    rsx! {
        tr {
            class: "{class}",
            style: "{row_style}",
            onmouseenter: move |_| is_hovered.set(true),
            onmouseleave: move |_| is_hovered.set(false),

            td {
                title: "{referral.email}",
                "{referral.display_name()}"
            }
            td {
                title: "{referral.date.standard_format()}",
                "{referral.date}"
            }
            td { "{referral.rewards.to_string_with_code()}" }
        }
    }
}

/// Date column header. The arrow only marks the backend's newest-first order;
/// clicking does nothing.
#[component]
fn DateHeader() -> Element {
    rsx! {
        th {
            "aria-sort": "descending",
            style: "white-space: nowrap;",
            "Date"
            span {
                class: "sort-indicator",
                "aria-hidden": "true",
                "▼"
            }
        }
    }
}

/// The loaded state of the widget: a card holding one row per referral,
/// in the order given.
#[component]
pub fn ReferralsCard(referrals: Vec<Referral>, #[props(default)] style: String) -> Element {
    rsx! {
        Card {
            style: "{style}",
            heading: rsx! {
                h3 { style: "margin-bottom: 0;", "Latest Referrals" }
            },
            actions: rsx! {
                div {
                    class: "card-actions",
                    style: "display: flex; justify-content: flex-end;",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        "View all"
                        span { class: "arrow", "aria-hidden": "true", " →" }
                    }
                }
            },
            div {
                class: "table-scroll",
                style: "overflow-x: auto;",
                table {
                    style: "min-width: 800px;",
                    thead {
                        tr {
                            th { "User" }
                            DateHeader {}
                            th { "Amount" }
                        }
                    }
                    tbody {
                        for (index, referral) in referrals.iter().enumerate() {
                            ReferralRow {
                                key: "{index}",
                                referral: referral.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Dashboard widget listing the latest referrals of `user_id`.
///
/// The referrals are fetched once, when the widget mounts. Until the request
/// settles only a loading line is shown; afterwards the table, which is empty
/// when the user is unknown or the request failed.
#[component]
pub fn LatestReferrals(
    #[props(!optional)] user_id: Option<String>,
    #[props(default)] style: String,
) -> Element {
    let referrals = use_referrals(user_id);

    rsx! {
        match &*referrals.read() {
            None => rsx! {
                p { "{LOADING_TEXT}" }
            },
            Some(list) => rsx! {
                ReferralsCard {
                    referrals: list.clone(),
                    style: style.clone(),
                }
            },
        }
    }
}

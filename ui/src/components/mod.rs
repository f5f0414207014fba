//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like buttons, cards, and tables.
pub mod latest_referrals;
pub mod pico;

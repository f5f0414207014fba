//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    children: Element,
    /// Rendered inside the card's `<header>`.
    #[props(optional)]
    heading: Option<Element>,
    /// Rendered inside the card's `<footer>`.
    #[props(optional)]
    actions: Option<Element>,
    #[props(default)]
    style: String,
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element, with optional header and footer
/// sections that Pico separates from the body with a rule.
pub fn Card(props: CardProps) -> Element {
    rsx! {
        article {
            style: "{props.style}",
            if let Some(heading) = props.heading {
                header { {heading} }
            }
            {props.children}
            if let Some(actions) = props.actions {
                footer { {actions} }
            }
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component. Without `on_click` it does nothing when pressed.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.button_type.to_class(), props.outline) {
        ("", true) => "outline".to_string(),
        (class, true) => format!("{class} outline"),
        (class, false) => class.to_string(),
    };
    rsx! {
        button {
            r#type: "button",
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

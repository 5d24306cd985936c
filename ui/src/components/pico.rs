//! Pico-style layout and button components. No stylesheet is linked; the
//! rules they rely on are inlined by `App`.

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

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(default = false)]
    disabled: bool,
    /// Renders `type="submit"` so the button triggers its enclosing form.
    #[props(default = false)]
    submit: bool,
}

/// A button that submits its enclosing form when `submit` is set.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            r#type: if props.submit { "submit" } else { "button" },
            disabled: props.disabled,
            {props.children}
        }
    }
}

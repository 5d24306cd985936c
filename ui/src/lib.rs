// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod debounce;
pub mod hooks;
mod screens;
pub mod submitter;
pub mod swap_form;

use app_state::AppState;
use components::pico::Container;
use screens::swap::SwapScreen;
use swap_types::prefs::SwapPrefs;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let swap_css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        font-family: system-ui, sans-serif;
    }

    .app-main-container {
        display: flex;
        justify-content: center;
        align-items: flex-start;
        padding-top: 4rem;
    }

    .swap-form {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        width: 100%;
        max-width: 400px;
    }

    .swap-form h5 { margin: 0 0 0.5rem 0; }

    .swap-form input { width: 100%; padding: 0.5rem; }

    .swap-form input:disabled { opacity: 0.6; }

    .rate-display {
        color: var(--pico-muted-color, #6b7280);
        font-size: 0.9rem;
    }

    .swap-form button[type="submit"] {
        margin-top: 0.5rem;
        padding: 0.75rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{swap_css}"
        }
        LoadedApp {
            prefs: SwapPrefs::default(),
        }
    }
}

/// Provides the session state and mounts the swap screen.
#[component]
fn LoadedApp(prefs: SwapPrefs) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(prefs.clone()));

    rsx! {
        div {
            class: "app-main-container",
            Container {
                SwapScreen {}
            }
        }
    }
}

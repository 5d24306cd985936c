// ui/src/components/swap_amount_input.rs
use dioxus::prelude::*;

/// A labeled free-form decimal field.
///
/// The text is passed through untouched; judging it is the form's job.
#[component]
pub fn SwapAmountInput(
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = false)] disabled: bool,
    #[props(default = "Enter amount".to_string())] placeholder: String,
) -> Element {
    let focus_css = r#"
        input.hide-placeholder-focus:focus::placeholder {
            color: transparent;
            opacity: 0;
        }
    "#;

    rsx! {
        style { "{focus_css}" }
        label {
            r#for: "{id}",
            "{label}"
        }
        input {
            id: "{id}",
            r#type: "text",
            class: "hide-placeholder-focus",
            inputmode: "decimal",
            autocomplete: "off",

            placeholder: "{placeholder}",
            value: "{value}",
            disabled,

            oninput: move |event| on_input.call(event.value()),
        }
    }
}

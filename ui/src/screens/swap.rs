//=============================================================================
// File: src/screens/swap.rs
//=============================================================================
use dioxus::prelude::*;

use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::swap_amount_input::SwapAmountInput;
use crate::hooks::use_field_debounce::use_field_debounce;
use crate::submitter::SimulatedSubmitter;
use crate::submitter::SwapSubmitter;
use crate::swap_form::Field;
use crate::swap_form::SwapForm;
use crate::AppState;

#[component]
pub fn SwapScreen() -> Element {
    let prefs = use_context::<AppState>().prefs.clone();

    // --- Main State ---
    let mut form = use_signal(|| SwapForm::from(&prefs));
    let mut debounce = use_field_debounce(form, prefs.debounce());
    let submitter = SimulatedSubmitter::new(prefs.submit_delay());

    // --- Event Handlers ---
    let handle_submit = move |event: FormEvent| {
        event.prevent_default();

        let Some(request) = form.write().begin_submit() else {
            return;
        };
        dioxus_logger::tracing::info!(
            "submitting swap: send={} receive={}",
            request.send,
            request.receive
        );

        spawn(async move {
            let receipt = submitter.submit(request).await;
            if form.peek().is_torn_down() {
                return;
            }
            compat::notify(&receipt.message());
            if form.write().complete_submit().is_some() {
                dioxus_logger::tracing::info!(
                    "swap complete: spent={} received={}",
                    receipt.spent,
                    receipt.received
                );
            }
        });
    };

    // --- Derived State ---
    let state = form.read();
    let is_processing = state.is_processing();

    rsx! {
        Card {
            form {
                class: "swap-form",
                onsubmit: handle_submit,

                h5 { "Swap" }

                SwapAmountInput {
                    id: "input-amount",
                    label: "Amount to send",
                    value: state.input_amount().to_string(),
                    disabled: is_processing,
                    on_input: move |value: String| debounce.edit(Field::Input, value),
                }

                SwapAmountInput {
                    id: "output-amount",
                    label: "Amount to receive",
                    value: state.output_amount().to_string(),
                    disabled: is_processing,
                    on_input: move |value: String| debounce.edit(Field::Output, value),
                }

                div {
                    class: "rate-display",
                    "{state.rate_display()}"
                }

                Button {
                    submit: true,
                    disabled: state.is_submit_disabled(),
                    "{state.button_label()}"
                }
            }
        }
    }
}

//! Headless state of the swap form.
//!
//! Every rule of the form lives here so it can be exercised without a renderer.
//! The view owns a `SwapForm` inside a signal, forwards DOM events to it, and
//! runs the timers it asks for.

use swap_types::conversion::is_valid_amount;
use swap_types::conversion::Converter;
use swap_types::prefs::SwapPrefs;
use swap_types::SwapReceipt;
use swap_types::SwapRequest;

use crate::debounce::DebounceTicket;
use crate::debounce::Debouncer;

pub const LABEL_PROCESSING: &str = "Processing...";
pub const LABEL_ENTER_AMOUNT: &str = "Enter an amount";
pub const LABEL_CONFIRM: &str = "CONFIRM SWAP";

/// One of the two linked amount fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum Field {
    /// "Amount to send".
    Input,
    /// "Amount to receive".
    Output,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Field::Input => Field::Output,
            Field::Output => Field::Input,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// Holds the field texts captured when the submit was accepted.
    Submitting(SwapRequest),
}

/// A recomputation the view must run once the debounce delay elapses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingRecompute {
    pub field: Field,
    ticket: DebounceTicket,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SwapForm {
    converter: Converter,
    rate_display: String,
    input_amount: String,
    output_amount: String,
    is_valid: bool,
    submission: SubmissionState,
    input_debounce: Debouncer<String>,
    output_debounce: Debouncer<String>,
    torn_down: bool,
}

impl SwapForm {
    pub fn new(converter: Converter, rate_display_places: u32) -> Self {
        let rate_display = converter.rate().display_line(rate_display_places);
        Self {
            converter,
            rate_display,
            input_amount: String::new(),
            output_amount: String::new(),
            is_valid: false,
            submission: SubmissionState::Idle,
            input_debounce: Debouncer::default(),
            output_debounce: Debouncer::default(),
            torn_down: false,
        }
    }

    // --- Getters ---

    pub fn input_amount(&self) -> &str {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &str {
        &self.output_amount
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_processing(&self) -> bool {
        self.submission.is_submitting()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // --- Editing ---

    /// Applies a keystroke to `field` immediately and schedules the recompute
    /// of the other field.
    ///
    /// Validity follows the typed text at once. An output edit stays invalid
    /// until its recompute has checked the derived input.
    ///
    /// Edits are ignored while a submission is in flight or after teardown.
    pub fn edit(&mut self, field: Field, value: String) -> Option<PendingRecompute> {
        if self.torn_down || self.is_processing() {
            return None;
        }
        // The other field's pending recompute would overwrite what was just typed.
        self.slot_mut(field.other()).cancel();
        self.is_valid = match field {
            Field::Input => is_valid_amount(&value),
            Field::Output => false,
        };
        *self.field_mut(field) = value.clone();
        let ticket = self.slot_mut(field).schedule(value);
        Some(PendingRecompute { field, ticket })
    }

    /// Runs a debounced recompute. Returns `false` when it was superseded,
    /// cancelled, or the form was torn down.
    pub fn recompute(&mut self, pending: PendingRecompute) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(value) = self.slot_mut(pending.field).redeem(pending.ticket) else {
            return false;
        };
        let derived = match pending.field {
            Field::Input => self.converter.from_input(&value),
            Field::Output => self.converter.from_output(&value),
        };
        *self.field_mut(pending.field.other()) = derived.amount;
        self.is_valid = derived.is_valid;
        true
    }

    // --- Submission ---

    /// `Idle -> Submitting`. Returns the captured request, or `None` when the
    /// form is invalid or already submitting.
    pub fn begin_submit(&mut self) -> Option<SwapRequest> {
        if self.torn_down || !self.is_valid || self.is_processing() {
            return None;
        }
        let request = SwapRequest {
            send: self.input_amount.clone(),
            receive: self.output_amount.clone(),
        };
        self.submission = SubmissionState::Submitting(request.clone());
        Some(request)
    }

    /// `Submitting -> Idle`. Clears both fields and the validity flag.
    pub fn complete_submit(&mut self) -> Option<SwapReceipt> {
        if self.torn_down {
            return None;
        }
        let SubmissionState::Submitting(request) = std::mem::take(&mut self.submission) else {
            return None;
        };
        self.reset_fields();
        Some(request.into())
    }

    /// Marks the form unmounted. Nothing mutates it afterwards.
    pub fn teardown(&mut self) {
        self.input_debounce.cancel();
        self.output_debounce.cancel();
        self.torn_down = true;
    }

    // --- Presentation ---

    pub fn button_label(&self) -> &'static str {
        if self.is_processing() {
            LABEL_PROCESSING
        } else if self.input_amount.trim().is_empty() {
            LABEL_ENTER_AMOUNT
        } else {
            LABEL_CONFIRM
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        !self.is_valid || self.is_processing() || self.input_amount.trim().is_empty()
    }

    pub fn rate_display(&self) -> &str {
        &self.rate_display
    }

    fn reset_fields(&mut self) {
        self.input_debounce.cancel();
        self.output_debounce.cancel();
        self.input_amount.clear();
        self.output_amount.clear();
        self.is_valid = false;
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Input => &mut self.input_amount,
            Field::Output => &mut self.output_amount,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Debouncer<String> {
        match field {
            Field::Input => &mut self.input_debounce,
            Field::Output => &mut self.output_debounce,
        }
    }
}

impl Default for SwapForm {
    fn default() -> Self {
        Self::from(&SwapPrefs::default())
    }
}

impl From<&SwapPrefs> for SwapForm {
    fn from(prefs: &SwapPrefs) -> Self {
        Self::new(Converter::from(prefs), prefs.rate_display_places())
    }
}

//! Converts the free-form text of one swap field into the text of the other.
//!
//! Invalid input never raises: it yields an empty derived field and an
//! invalid flag.

use crate::amount::Amount;
use crate::exchange_rate::ExchangeRate;
use crate::prefs::SwapPrefs;
use crate::rounding::Rounding;

/// Returns `true` iff `raw` parses to a finite, strictly positive decimal.
pub fn is_valid_amount(raw: &str) -> bool {
    Amount::parse_positive(raw).is_ok()
}

/// The result of recomputing one field from the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    /// Text for the field that was *not* edited.
    pub amount: String,
    /// Validity of the value the check was run against.
    pub is_valid: bool,
}

/// Rate plus fixed-point settings. Nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    rate: ExchangeRate,
    places: u32,
    rounding: Rounding,
}

impl Converter {
    pub fn new(rate: ExchangeRate, places: u32, rounding: Rounding) -> Self {
        Self {
            rate,
            places,
            rounding,
        }
    }

    pub fn rate(&self) -> &ExchangeRate {
        &self.rate
    }

    pub fn places(&self) -> u32 {
        self.places
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// The receive amount for a typed send amount, or `""` if the input is unusable.
    pub fn derive_output(&self, input: &str) -> String {
        match Amount::parse_positive(input) {
            Ok(amount) => self
                .rate
                .convert_forward(&amount, self.places, self.rounding)
                .to_string(),
            Err(_) => String::new(),
        }
    }

    /// The send amount for a typed receive amount, or `""` if the output is unusable.
    pub fn derive_input(&self, output: &str) -> String {
        match Amount::parse_positive(output) {
            Ok(amount) => self
                .rate
                .convert_backward(&amount, self.places, self.rounding)
                .to_string(),
            Err(_) => String::new(),
        }
    }

    /// Recompute after the send field was edited.
    ///
    /// Validity is judged on the typed value.
    pub fn from_input(&self, input: &str) -> Derived {
        Derived {
            amount: self.derive_output(input),
            is_valid: is_valid_amount(input),
        }
    }

    /// Recompute after the receive field was edited.
    ///
    /// When the typed value is usable, validity is judged on the *derived*
    /// send amount, so a tiny output whose input truncates to `0.00` is invalid.
    pub fn from_output(&self, output: &str) -> Derived {
        let amount = self.derive_input(output);
        let is_valid = if amount.is_empty() {
            false
        } else {
            is_valid_amount(&amount)
        };
        Derived { amount, is_valid }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::from(&SwapPrefs::default())
    }
}

impl From<&SwapPrefs> for Converter {
    fn from(prefs: &SwapPrefs) -> Self {
        Self::new(
            prefs.exchange_rate().clone(),
            prefs.decimal_places(),
            prefs.rounding(),
        )
    }
}

//! The fixed rate between the send and receive sides of a swap.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::amount::Amount;
use crate::amount::AmountError;
use crate::rounding::Rounding;

/// The default session rate: one unit sent buys 0.85 units received.
pub const DEFAULT_EXCHANGE_RATE: &str = "0.85";

/// A strictly positive multiplier from the send amount to the receive amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExchangeRate(Amount);

impl ExchangeRate {
    pub fn new(rate: Amount) -> Result<Self, AmountError> {
        if rate.is_positive() {
            Ok(Self(rate))
        } else {
            Err(AmountError::NotPositive)
        }
    }

    /// `amount * rate`, kept to `places` fractional digits.
    pub fn convert_forward(&self, amount: &Amount, places: u32, rounding: Rounding) -> Amount {
        amount.mul_exact(&self.0).round_to(places, rounding)
    }

    /// `amount / rate`, kept to `places` fractional digits.
    pub fn convert_backward(&self, amount: &Amount, places: u32, rounding: Rounding) -> Amount {
        // the rate is never zero, see `new`
        amount
            .div_to(&self.0, places, rounding)
            .unwrap_or_else(Amount::zero)
    }

    /// The rate line shown under the form (e.g., "1 = 0.8500").
    pub fn display_line(&self, places: u32) -> String {
        format!("1 = {}", self.0.to_fixed(places, Rounding::Down))
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self(Amount::from_units(85, 2))
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExchangeRate {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Amount::from_str(s)?)
    }
}

impl TryFrom<String> for ExchangeRate {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExchangeRate> for String {
    fn from(rate: ExchangeRate) -> Self {
        rate.to_string()
    }
}

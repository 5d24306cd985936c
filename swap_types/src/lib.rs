//! Domain types shared by the swap form: exact decimal amounts, the exchange
//! rate, field conversion, and preferences.

pub mod amount;
pub mod conversion;
pub mod exchange_rate;
pub mod prefs;
pub mod rounding;

use serde::Deserialize;
use serde::Serialize;

/// The literal field texts captured when a swap is submitted.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SwapRequest {
    pub send: String,
    pub receive: String,
}

/// What a completed swap reports back to the user.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SwapReceipt {
    pub spent: String,
    pub received: String,
}

impl SwapReceipt {
    pub fn message(&self) -> String {
        format!(
            "Transaction successful! You have spent {} and received {}",
            self.spent, self.received
        )
    }
}

impl From<SwapRequest> for SwapReceipt {
    fn from(request: SwapRequest) -> Self {
        Self {
            spent: request.send,
            received: request.receive,
        }
    }
}

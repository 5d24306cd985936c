//! The simulated swap "backend".

use std::future::Future;
use std::time::Duration;

use swap_types::SwapReceipt;
use swap_types::SwapRequest;

use crate::compat;

/// Something that can carry out a swap. Submission never fails.
pub trait SwapSubmitter {
    fn submit(&self, request: SwapRequest) -> impl Future<Output = SwapReceipt>;
}

/// Waits `delay`, then reports the request back as a receipt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl SwapSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: SwapRequest) -> SwapReceipt {
        if !self.delay.is_zero() {
            compat::sleep(self.delay).await;
        }
        request.into()
    }
}

//! Shared building blocks for the swap screen.
pub mod pico;
pub mod swap_amount_input;

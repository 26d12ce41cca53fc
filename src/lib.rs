#![doc(test(attr(deny(warnings))))]

//! Settle Core computes who owes whom within a household for a reporting
//! period and reduces those debts to a short list of point-to-point transfers.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod utils;

pub use engine::{compute_balances, simplify, Balances, SettlementEngine, SettlementPlan};
pub use errors::SettlementError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Settle Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}

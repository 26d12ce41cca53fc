//! Settlement computation: balance netting followed by greedy debt simplification.

pub mod balance;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod simplify;

pub use balance::{compute_balances, Balances};
pub use engine::{SettlementEngine, SettlementPlan};
pub use simplify::simplify;

//! Household settlement domain values: participants, expenses, prior payments,
//! and the transfers produced by the engine.

pub mod expense;
pub mod participant;
pub mod period;
pub mod settlement;
pub mod transfer;

pub use expense::SharedExpenseRecord;
pub use participant::{Participant, ParticipantId};
pub use period::Period;
pub use settlement::SettlementRecord;
pub use transfer::{LabeledTransfer, Transfer};

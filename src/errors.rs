use thiserror::Error;
use uuid::Uuid;

use crate::domain::ParticipantId;

/// Error type that captures malformed settlement input.
#[derive(Debug, Error, PartialEq)]
pub enum SettlementError {
    #[error("Expense {expense} has invalid amount {amount}")]
    InvalidExpenseAmount { expense: Uuid, amount: f64 },
    #[error("Settlement {settlement} has invalid amount {amount}")]
    InvalidSettlementAmount { settlement: Uuid, amount: f64 },
    #[error("Settlement from participant {0} to themselves")]
    SelfSettlement(ParticipantId),
    #[error("Participant {0} listed more than once")]
    DuplicateParticipant(ParticipantId),
    #[error("Balances do not net to zero (residual {residual:.4})")]
    Imbalanced { residual: f64 },
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

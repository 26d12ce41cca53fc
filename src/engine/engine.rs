use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    currency::{round_to_cents, SETTLED_THRESHOLD},
    domain::{Participant, SettlementRecord, SharedExpenseRecord, Transfer},
    engine::{compute_balances, simplify, Balances},
    errors::SettlementError,
};

/// Balances for a period together with the transfers that clear them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementPlan {
    pub balances: Balances,
    pub transfers: Vec<Transfer>,
}

impl SettlementPlan {
    /// True when nobody owes anybody anything.
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }

    pub fn total_transferred(&self) -> f64 {
        round_to_cents(self.transfers.iter().map(|t| t.amount).sum())
    }
}

/// Validates caller input, then runs the balance and simplification stages.
pub struct SettlementEngine;

impl SettlementEngine {
    pub fn settle(
        participants: &[Participant],
        expenses: &[SharedExpenseRecord],
        prior_settlements: &[SettlementRecord],
    ) -> Result<SettlementPlan, SettlementError> {
        let balances = Self::balances(participants, expenses, prior_settlements)?;
        let transfers = simplify(&balances);
        info!(
            participants = participants.len(),
            expenses = expenses.len(),
            transfers = transfers.len(),
            "settlement computed"
        );
        Ok(SettlementPlan {
            balances,
            transfers,
        })
    }

    pub fn balances(
        participants: &[Participant],
        expenses: &[SharedExpenseRecord],
        prior_settlements: &[SettlementRecord],
    ) -> Result<Balances, SettlementError> {
        Self::validate(participants, expenses, prior_settlements)?;
        let balances = compute_balances(participants, expenses, prior_settlements);
        let residual = balances.total();
        debug!(
            entries = balances.len(),
            residual, "computed balances"
        );
        if residual.abs() > SETTLED_THRESHOLD {
            return Err(SettlementError::Imbalanced { residual });
        }
        Ok(balances)
    }

    fn validate(
        participants: &[Participant],
        expenses: &[SharedExpenseRecord],
        prior_settlements: &[SettlementRecord],
    ) -> Result<(), SettlementError> {
        let mut seen = BTreeSet::new();
        for participant in participants {
            if !seen.insert(participant.id) {
                return Err(SettlementError::DuplicateParticipant(participant.id));
            }
        }
        if let Some(expense) = expenses
            .iter()
            .find(|expense| !is_valid_amount(expense.amount))
        {
            return Err(SettlementError::InvalidExpenseAmount {
                expense: expense.id,
                amount: expense.amount,
            });
        }
        for settlement in prior_settlements {
            if !is_valid_amount(settlement.amount) {
                return Err(SettlementError::InvalidSettlementAmount {
                    settlement: settlement.id,
                    amount: settlement.amount,
                });
            }
            if settlement.from == settlement.to {
                return Err(SettlementError::SelfSettlement(settlement.from));
            }
        }
        Ok(())
    }
}

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

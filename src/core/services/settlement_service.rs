use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::Config,
    currency::{format_currency_value, round_to_cents},
    domain::{
        LabeledTransfer, Participant, ParticipantId, Period, SettlementRecord,
        SharedExpenseRecord, Transfer,
    },
    engine::{Balances, SettlementEngine},
};

use super::{ServiceError, ServiceResult};

/// Settlement results for one household period, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSettlement {
    pub period: Period,
    pub total_shared: f64,
    pub share_per_participant: f64,
    pub balances: Balances,
    pub transfers: Vec<LabeledTransfer>,
}

impl PeriodSettlement {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }

    pub fn plain_transfers(&self) -> Vec<Transfer> {
        self.transfers.iter().map(|t| t.transfer).collect()
    }
}

pub struct SettlementService;

impl SettlementService {
    /// Settles the expenses dated inside `period` against the settlements
    /// already recorded for it. Records from other periods are ignored.
    pub fn settle_period(
        period: Period,
        participants: &[Participant],
        expenses: &[SharedExpenseRecord],
        settlements: &[SettlementRecord],
    ) -> ServiceResult<PeriodSettlement> {
        let expenses: Vec<SharedExpenseRecord> = expenses
            .iter()
            .filter(|expense| period.contains(expense.date))
            .cloned()
            .collect();
        let settlements: Vec<SettlementRecord> = settlements
            .iter()
            .filter(|settlement| settlement.period == period)
            .cloned()
            .collect();
        debug!(
            period = %period,
            expenses = expenses.len(),
            settlements = settlements.len(),
            "selected period records"
        );

        let plan = SettlementEngine::settle(participants, &expenses, &settlements)?;
        let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
        let share_per_participant = if participants.is_empty() {
            0.0
        } else {
            round_to_cents(total / participants.len() as f64)
        };

        Ok(PeriodSettlement {
            period,
            total_shared: round_to_cents(total),
            share_per_participant,
            transfers: Self::label_transfers(participants, &plan.transfers),
            balances: plan.balances,
        })
    }

    /// Attaches participant names and colors; unknown ids are labeled by id.
    pub fn label_transfers(
        participants: &[Participant],
        transfers: &[Transfer],
    ) -> Vec<LabeledTransfer> {
        let roster: BTreeMap<ParticipantId, &Participant> =
            participants.iter().map(|p| (p.id, p)).collect();
        let label = |id: ParticipantId| match roster.get(&id) {
            Some(participant) => (participant.name.clone(), participant.color.clone()),
            None => (id.to_string(), None),
        };
        transfers
            .iter()
            .map(|transfer| {
                let (from_name, from_color) = label(transfer.from);
                let (to_name, to_color) = label(transfer.to);
                LabeledTransfer {
                    transfer: *transfer,
                    from_name,
                    to_name,
                    from_color,
                    to_color,
                }
            })
            .collect()
    }

    /// Converts accepted transfers into settlement records for `period`.
    pub fn record_transfers(
        period: Period,
        transfers: &[Transfer],
        paid_on: NaiveDate,
    ) -> ServiceResult<Vec<SettlementRecord>> {
        transfers
            .iter()
            .map(|transfer| {
                if !transfer.amount.is_finite() || transfer.amount <= 0.0 {
                    return Err(ServiceError::Invalid(format!(
                        "transfer amount {} must be positive",
                        transfer.amount
                    )));
                }
                if transfer.from == transfer.to {
                    return Err(ServiceError::Invalid(format!(
                        "transfer from {} to themselves",
                        transfer.from
                    )));
                }
                Ok(
                    SettlementRecord::new(transfer.from, transfer.to, transfer.amount, period)
                        .paid_on(paid_on),
                )
            })
            .collect()
    }

    /// Renders one line per transfer, e.g. `Bob → Alice: $50.00`.
    pub fn describe(settlement: &PeriodSettlement, config: &Config) -> Vec<String> {
        if settlement.is_settled() {
            return vec!["All settled up".to_string()];
        }
        settlement
            .transfers
            .iter()
            .map(|t| {
                format!(
                    "{} → {}: {}",
                    t.from_name,
                    t.to_name,
                    format_currency_value(t.transfer.amount, &config.currency, &config.locale)
                )
            })
            .collect()
    }
}

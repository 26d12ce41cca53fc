use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{from_cents, is_settled, to_cents, SETTLED_THRESHOLD},
    domain::{Participant, ParticipantId, SettlementRecord, SharedExpenseRecord, Transfer},
};

/// Net signed claim per participant: positive is owed money, negative owes money.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balances {
    entries: BTreeMap<ParticipantId, f64>,
}

impl Balances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ParticipantId) -> Option<f64> {
        self.entries.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, f64)> + '_ {
        self.entries.iter().map(|(id, amount)| (*id, *amount))
    }

    /// Sum of every balance; zero (within threshold) for a consistent ledger.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn creditors(&self) -> usize {
        self.entries
            .values()
            .filter(|amount| **amount > SETTLED_THRESHOLD)
            .count()
    }

    pub fn debtors(&self) -> usize {
        self.entries
            .values()
            .filter(|amount| **amount < -SETTLED_THRESHOLD)
            .count()
    }

    pub fn is_fully_settled(&self) -> bool {
        self.entries.values().all(|amount| is_settled(*amount))
    }

    /// Returns the balances left after every transfer has been paid.
    pub fn apply_transfers(&self, transfers: &[Transfer]) -> Balances {
        transfers.iter().fold(self.clone(), |balances, transfer| {
            balances
                .adjust(transfer.from, transfer.amount)
                .adjust(transfer.to, -transfer.amount)
        })
    }

    fn adjust(mut self, id: ParticipantId, delta: f64) -> Self {
        *self.entries.entry(id).or_insert(0.0) += delta;
        self
    }
}

impl FromIterator<(ParticipantId, f64)> for Balances {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Balances::new(), |balances, (id, amount)| {
                balances.adjust(id, amount)
            })
    }
}

impl IntoIterator for Balances {
    type Item = (ParticipantId, f64);
    type IntoIter = btree_map::IntoIter<ParticipantId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Signed whole-cent claims, accumulated before conversion back to `Balances`.
type CentLedger = BTreeMap<ParticipantId, i64>;

fn credit(mut ledger: CentLedger, id: ParticipantId, cents: i64) -> CentLedger {
    *ledger.entry(id).or_insert(0) += cents;
    ledger
}

/// Splits one expense over `sharers`, which must be sorted by id. Leftover
/// cents go one each to the lowest ids, so the shares add up to the amount.
fn split_expense(
    ledger: CentLedger,
    sharers: &[ParticipantId],
    expense: &SharedExpenseRecord,
) -> CentLedger {
    let amount = to_cents(expense.amount);
    let count = sharers.len() as i64;
    let (base, leftover) = (amount.div_euclid(count), amount.rem_euclid(count));
    let ledger = credit(ledger, expense.payer, amount);
    sharers
        .iter()
        .enumerate()
        .fold(ledger, |ledger, (idx, id)| {
            let share = if (idx as i64) < leftover { base + 1 } else { base };
            credit(ledger, *id, -share)
        })
}

fn net_settlement(ledger: CentLedger, settlement: &SettlementRecord) -> CentLedger {
    let amount = to_cents(settlement.amount);
    let ledger = credit(ledger, settlement.from, amount);
    credit(ledger, settlement.to, -amount)
}

/// Nets shared expenses and prior payments into one balance per participant.
///
/// Every listed participant receives an entry. Each expense is split equally
/// across `participants` in whole cents; the payer is credited the amount minus
/// their own share. When the amount does not divide evenly the leftover cents
/// are borne one each by the participants with the lowest ids. Prior
/// settlements then credit the payer and debit the recipient. Ids that appear
/// only in expenses or settlements still receive an entry.
///
/// The result is cent-exact and sums to exactly zero. With an empty roster
/// expenses are skipped, since there is nobody to split them between.
pub fn compute_balances(
    participants: &[Participant],
    expenses: &[SharedExpenseRecord],
    prior_settlements: &[SettlementRecord],
) -> Balances {
    let mut sharers: Vec<ParticipantId> = participants.iter().map(|p| p.id).collect();
    sharers.sort();
    let seeded: CentLedger = sharers.iter().map(|id| (*id, 0)).collect();
    let after_expenses = if sharers.is_empty() {
        seeded
    } else {
        expenses.iter().fold(seeded, |ledger, expense| {
            split_expense(ledger, &sharers, expense)
        })
    };
    prior_settlements
        .iter()
        .fold(after_expenses, net_settlement)
        .into_iter()
        .map(|(id, cents)| (id, from_cents(cents)))
        .collect()
}

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::{
    currency::{from_cents, to_cents, SETTLED_THRESHOLD},
    domain::{ParticipantId, Transfer},
    engine::Balances,
};

#[derive(Debug, Clone, Copy)]
struct Position {
    id: ParticipantId,
    /// Whole cents still to pay or receive.
    remaining: i64,
}

/// Largest amount first; equal amounts fall back to ascending participant id.
fn by_amount_then_id(a: &Position, b: &Position) -> Ordering {
    b.remaining
        .cmp(&a.remaining)
        .then_with(|| a.id.cmp(&b.id))
}

fn partition(balances: &Balances) -> (Vec<Position>, Vec<Position>) {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();
    for (id, amount) in balances.iter() {
        if amount > SETTLED_THRESHOLD {
            creditors.push(Position {
                id,
                remaining: to_cents(amount),
            });
        } else if amount < -SETTLED_THRESHOLD {
            debtors.push(Position {
                id,
                remaining: to_cents(-amount),
            });
        }
    }
    creditors.sort_by(by_amount_then_id);
    debtors.sort_by(by_amount_then_id);
    (creditors, debtors)
}

/// Reduces a zero-sum balance map to a short list of debtor → creditor transfers.
///
/// Balances within one cent of zero are treated as settled; the rest are
/// rounded to whole cents. The largest remaining debtor is then repeatedly
/// matched against the largest remaining creditor, and each transfer carries
/// the smaller of the two remaining amounts. Cent-exact input, as produced by
/// [`compute_balances`](crate::engine::compute_balances), is therefore cleared
/// exactly. Any residual left once either side runs out is dropped.
///
/// At most `creditors + debtors - 1` transfers are emitted.
pub fn simplify(balances: &Balances) -> Vec<Transfer> {
    let (mut creditors, mut debtors) = partition(balances);
    debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        "simplifying balances"
    );

    let mut transfers = Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
    let (mut ci, mut di) = (0, 0);
    while ci < creditors.len() && di < debtors.len() {
        let creditor = &mut creditors[ci];
        let debtor = &mut debtors[di];

        let amount = debtor.remaining.min(creditor.remaining);
        debug_assert!(amount > 0, "matched positions always hold at least a cent");
        transfers.push(Transfer::new(debtor.id, creditor.id, from_cents(amount)));
        debtor.remaining -= amount;
        creditor.remaining -= amount;

        if debtor.remaining == 0 {
            di += 1;
        }
        if creditor.remaining == 0 {
            ci += 1;
        }
    }

    let residual = from_cents(
        creditors[ci..]
            .iter()
            .chain(debtors[di..].iter())
            .map(|position| position.remaining)
            .sum(),
    );
    if residual > SETTLED_THRESHOLD {
        warn!(residual, "dropping unmatched balance left after simplification");
    }

    transfers
}

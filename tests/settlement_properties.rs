mod common;

use common::{household, march_2024, sample_date};
use proptest::prelude::*;
use settle_core::{
    compute_balances,
    currency::{to_cents, SETTLED_THRESHOLD},
    domain::{Participant, SettlementRecord, SharedExpenseRecord, Transfer},
    simplify, SettlementEngine,
};

const NAMES: [&str; 6] = ["Ana", "Ben", "Cai", "Dee", "Eli", "Fay"];

fn roster(count: usize) -> Vec<Participant> {
    household(&NAMES[..count])
}

fn expenses_from(people: &[Participant], raw: &[(usize, u64)]) -> Vec<SharedExpenseRecord> {
    raw.iter()
        .map(|(payer, cents)| {
            let payer = people[payer % people.len()].id;
            SharedExpenseRecord::new(payer, *cents as f64 / 100.0, sample_date(2024, 3, 15))
        })
        .collect()
}

fn settlements_from(people: &[Participant], raw: &[(usize, usize, u64)]) -> Vec<SettlementRecord> {
    raw.iter()
        .filter_map(|(from, to, cents)| {
            let from = people[from % people.len()].id;
            let to = people[to % people.len()].id;
            (from != to).then(|| SettlementRecord::new(from, to, *cents as f64 / 100.0, march_2024()))
        })
        .collect()
}

fn as_settlements(transfers: &[Transfer]) -> Vec<SettlementRecord> {
    transfers
        .iter()
        .map(|t| SettlementRecord::new(t.from, t.to, t.amount, march_2024()))
        .collect()
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        expenses in prop::collection::vec((0usize..6, 0u64..=500_000), 0..=30),
        settlements in prop::collection::vec((0usize..6, 0usize..6, 0u64..=50_000), 0..=10),
    ) {
        let people = roster(member_count);
        let balances = compute_balances(
            &people,
            &expenses_from(&people, &expenses),
            &settlements_from(&people, &settlements),
        );
        prop_assert!(balances.total().abs() <= SETTLED_THRESHOLD);
        prop_assert_eq!(balances.len(), member_count);
    }

    #[test]
    fn transfer_count_stays_within_bound(
        member_count in 1usize..=6,
        expenses in prop::collection::vec((0usize..6, 0u64..=500_000), 0..=30),
    ) {
        let people = roster(member_count);
        let balances = compute_balances(&people, &expenses_from(&people, &expenses), &[]);
        let transfers = simplify(&balances);
        let bound = (balances.creditors() + balances.debtors()).saturating_sub(1);
        prop_assert!(transfers.len() <= bound);
        for transfer in &transfers {
            prop_assert!(transfer.amount > 0.0);
            prop_assert_ne!(transfer.from, transfer.to);
            prop_assert_eq!(transfer.amount, (transfer.amount * 100.0).round() / 100.0);
        }
    }

    #[test]
    fn balances_are_whole_cents_summing_to_zero(
        member_count in 1usize..=6,
        expenses in prop::collection::vec((0usize..6, 0u64..=500_000), 0..=30),
        settlements in prop::collection::vec((0usize..6, 0usize..6, 0u64..=50_000), 0..=10),
    ) {
        let people = roster(member_count);
        let balances = compute_balances(
            &people,
            &expenses_from(&people, &expenses),
            &settlements_from(&people, &settlements),
        );
        let mut cents = 0i64;
        for (_, amount) in balances.iter() {
            prop_assert_eq!(amount, to_cents(amount) as f64 / 100.0);
            cents += to_cents(amount);
        }
        prop_assert_eq!(cents, 0);
    }

    #[test]
    fn transfers_clear_balances_within_rounding(
        member_count in 1usize..=6,
        expenses in prop::collection::vec((0usize..6, 0u64..=500_000), 0..=30),
    ) {
        let people = roster(member_count);
        let balances = compute_balances(&people, &expenses_from(&people, &expenses), &[]);
        let transfers = simplify(&balances);
        let remaining = balances.apply_transfers(&transfers);
        prop_assert!(remaining.is_fully_settled(), "left over: {:?}", remaining);
    }

    #[test]
    fn replaying_transfers_as_settlements_clears_the_period(
        member_count in 1usize..=6,
        expenses in prop::collection::vec((0usize..6, 0u64..=500_000), 0..=30),
    ) {
        let people = roster(member_count);
        let expenses = expenses_from(&people, &expenses);
        let plan = SettlementEngine::settle(&people, &expenses, &[]).unwrap();
        let replay = SettlementEngine::settle(&people, &expenses, &as_settlements(&plan.transfers)).unwrap();
        prop_assert!(replay.balances.is_fully_settled(), "left over: {:?}", replay.balances);
        prop_assert!(replay.transfers.is_empty());
    }

    #[test]
    fn roster_order_does_not_change_transfers(
        member_count in 2usize..=6,
        rotation in 0usize..6,
        expenses in prop::collection::vec((0usize..6, 0u64..=500_000), 0..=30),
    ) {
        let people = roster(member_count);
        let expenses = expenses_from(&people, &expenses);
        let mut shuffled = people.clone();
        shuffled.rotate_left(rotation % member_count);
        shuffled.reverse();

        let original = SettlementEngine::settle(&people, &expenses, &[]).unwrap();
        let reordered = SettlementEngine::settle(&shuffled, &expenses, &[]).unwrap();
        prop_assert_eq!(original, reordered);
    }
}

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use settle_core::{
    compute_balances,
    domain::{Participant, ParticipantId, SharedExpenseRecord},
    simplify,
};

fn build_household(members: usize, expenses: usize) -> (Vec<Participant>, Vec<SharedExpenseRecord>) {
    let participants: Vec<Participant> = (0..members)
        .map(|idx| Participant::with_id(ParticipantId::from_u128(idx as u128 + 1), format!("P{idx}")))
        .collect();
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let records = (0..expenses)
        .map(|idx| {
            let payer = participants[(idx * 7) % members].id;
            SharedExpenseRecord::new(payer, 10.0 + (idx % 250) as f64 * 1.37, date)
        })
        .collect();
    (participants, records)
}

fn bench_settlement(c: &mut Criterion) {
    let (participants, expenses) = build_household(black_box(500), black_box(20_000));

    c.bench_function("compute_balances_500x20k", |b| {
        b.iter(|| black_box(compute_balances(&participants, &expenses, &[])))
    });

    let balances = compute_balances(&participants, &expenses, &[]);
    c.bench_function("simplify_500", |b| b.iter(|| black_box(simplify(&balances))));
}

criterion_group!(benches, bench_settlement);
criterion_main!(benches);

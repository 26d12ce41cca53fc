#![allow(dead_code)]

use chrono::NaiveDate;
use settle_core::domain::{Participant, ParticipantId, Period};

pub fn id(value: u128) -> ParticipantId {
    ParticipantId::from_u128(value)
}

/// Builds a roster whose ids sort in the order given (A < B < C ...).
pub fn household(names: &[&str]) -> Vec<Participant> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Participant::with_id(id(idx as u128 + 1), *name))
        .collect()
}

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn march_2024() -> Period {
    Period::new(2024, 3).unwrap()
}

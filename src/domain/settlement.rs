use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{participant::ParticipantId, period::Period};

/// A payment that already happened between two participants within a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementRecord {
    pub id: Uuid,
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: f64,
    pub period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
}

impl SettlementRecord {
    pub fn new(from: ParticipantId, to: ParticipantId, amount: f64, period: Period) -> Self {
        Self {
            id: Uuid::new_v4(),
            from,
            to,
            amount,
            period,
            paid_on: None,
        }
    }

    pub fn paid_on(mut self, date: NaiveDate) -> Self {
        self.paid_on = Some(date);
        self
    }
}

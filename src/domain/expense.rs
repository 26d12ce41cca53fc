use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::participant::ParticipantId;

/// An expense fronted by one participant and split equally across the household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedExpenseRecord {
    pub id: Uuid,
    pub payer: ParticipantId,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl SharedExpenseRecord {
    pub fn new(payer: ParticipantId, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            payer,
            amount,
            date,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

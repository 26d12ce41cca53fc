use serde::{Deserialize, Serialize};

use crate::domain::participant::ParticipantId;

/// A payment instruction emitted by the simplifier: `from` pays `to`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: f64,
}

impl Transfer {
    pub fn new(from: ParticipantId, to: ParticipantId, amount: f64) -> Self {
        Self { from, to, amount }
    }
}


/// A transfer decorated with the display metadata of both participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledTransfer {
    #[serde(flatten)]
    pub transfer: Transfer,
    pub from_name: String,
    pub to_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_color: Option<String>,
}

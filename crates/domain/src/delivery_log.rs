use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Success,
    Failed,
}

/// Record of one delivery attempt for a `Mailing`. Exactly one is appended
/// per attempt, success or failure, and it is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DeliveryLog {
    pub id: ID,
    /// The `Mailing` this attempt belongs to
    pub mailing_id: ID,
    /// When the attempt was made
    pub attempt_time: i64,
    pub status: DeliveryStatus,
    /// Human readable outcome: delivered counts, or what went wrong
    pub detail: String,
}

impl Entity for DeliveryLog {
    fn id(&self) -> &ID {
        &self.id
    }
}

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_slot::TimeSlot;

/// Payload forwarded to the booking submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doctor_id: String,
    pub instant: NaiveDateTime,
    pub label: String,
}

impl BookingRequest {
    pub fn new(doctor_id: impl Into<String>, slot: &TimeSlot) -> Self {
        Self {
            doctor_id: doctor_id.into(),
            instant: slot.instant,
            label: slot.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: Uuid,
    pub doctor_id: String,
    pub instant: NaiveDateTime,
    pub submitted_at: DateTime<Utc>,
}

use async_trait::async_trait;
use chrono::Utc;
use docslot_core::{
    errors::{BookingError, BookingResult},
    models::booking::{BookingConfirmation, BookingRequest},
};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// Forwards a chosen slot to whatever performs the actual reservation.
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(&self, request: BookingRequest) -> BookingResult<BookingConfirmation>;
}

/// Accepts bookings in memory, refusing a second booking of the same doctor
/// at the same instant.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    bookings: Mutex<Vec<BookingConfirmation>>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn bookings(&self) -> Vec<BookingConfirmation> {
        self.bookings.lock().await.clone()
    }
}

#[async_trait]
impl BookingSubmitter for RecordingSubmitter {
    async fn submit(&self, request: BookingRequest) -> BookingResult<BookingConfirmation> {
        let mut bookings = self.bookings.lock().await;

        let taken = bookings
            .iter()
            .any(|booking| booking.doctor_id == request.doctor_id && booking.instant == request.instant);
        if taken {
            return Err(BookingError::Validation(format!(
                "{} at {} is already booked",
                request.doctor_id, request.label
            )));
        }

        let confirmation = BookingConfirmation {
            id: Uuid::new_v4(),
            doctor_id: request.doctor_id,
            instant: request.instant,
            submitted_at: Utc::now(),
        };
        info!(
            "Booked {} with {} at {}",
            confirmation.id, confirmation.doctor_id, confirmation.instant
        );
        bookings.push(confirmation.clone());

        Ok(confirmation)
    }
}

use async_trait::async_trait;
use docslot_core::{
    errors::BookingResult,
    models::{
        booking::{BookingConfirmation, BookingRequest},
        doctor::Doctor,
    },
};
use mockall::mock;

use crate::repositories::{booking::BookingSubmitter, doctor::DoctorDirectory};

// Mock collaborators for testing
mock! {
    pub DoctorDirectory {}

    impl DoctorDirectory for DoctorDirectory {
        fn find_by_id(&self, id: &str) -> Option<Doctor>;

        fn list(&self) -> Vec<Doctor>;
    }
}

mock! {
    pub BookingSubmitter {}

    #[async_trait]
    impl BookingSubmitter for BookingSubmitter {
        async fn submit(&self, request: BookingRequest) -> BookingResult<BookingConfirmation>;
    }
}

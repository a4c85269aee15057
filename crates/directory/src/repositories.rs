pub mod booking;
pub mod doctor;

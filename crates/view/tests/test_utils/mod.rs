#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use docslot_core::models::doctor::Doctor;
use docslot_directory::{
    SharedDirectory, mock::repositories::MockBookingSubmitter,
    repositories::doctor::InMemoryDirectory,
};

pub struct TestContext {
    pub directory: SharedDirectory,
    pub submitter: MockBookingSubmitter,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            directory: Arc::new(clinic()),
            submitter: MockBookingSubmitter::new(),
        }
    }
}

pub fn doctor(id: &str, name: &str, speciality: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        image: Some(format!("{}.png", id)),
        degree: "MBBS".to_string(),
        speciality: speciality.to_string(),
        experience: "4 Years".to_string(),
        about: "Focuses on preventive care.".to_string(),
        fees: 50,
        available: true,
    }
}

pub fn clinic() -> InMemoryDirectory {
    let mut resting = doctor("doc5", "Dr. Jennifer Garcia", "General physician");
    resting.available = false;

    InMemoryDirectory::new(vec![
        doctor("doc1", "Dr. Richard James", "General physician"),
        doctor("doc2", "Dr. Emily Larson", "Gynecologist"),
        doctor("doc3", "Dr. Sarah Patel", "General physician"),
        doctor("doc4", "Dr. Christopher Lee", "Pediatricians"),
        resting,
    ])
}

/// `2024-01-DD HH:MM`; 2024-01-01 is a Monday.
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

use chrono::{NaiveDate, NaiveDateTime, Utc};
use docslot_core::models::{
    booking::{BookingConfirmation, BookingRequest},
    doctor::Doctor,
    time_slot::{DaySlots, TimeSlot, WeekSlots},
};
use docslot_core::slots::{BusinessHours, generate_week};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_string};
use uuid::Uuid;

fn instant(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_doctor_deserializes_directory_record() {
    let raw = json!({
        "_id": "doc1",
        "name": "Dr. Richard James",
        "image": "doc1.png",
        "speciality": "General physician",
        "degree": "MBBS",
        "experience": "4 Years",
        "about": "Dr. Davis has a strong commitment to delivering comprehensive medical care.",
        "fees": 50
    });

    let doctor: Doctor = serde_json::from_value(raw).expect("Failed to deserialize doctor");

    assert_eq!(doctor.id, "doc1");
    assert_eq!(doctor.image.as_deref(), Some("doc1.png"));
    assert_eq!(doctor.fees, 50);
    assert!(doctor.available);
    assert_eq!(doctor.fee_label("$"), "$50");
}

#[test]
fn test_doctor_optional_fields_default() {
    let raw = r#"{"_id":"doc2","name":"Dr. Emily Larson","speciality":"Gynecologist","degree":"MBBS","experience":"3 Years","fees":60,"available":false}"#;

    let doctor: Doctor = from_str(raw).expect("Failed to deserialize doctor");

    assert_eq!(doctor.image, None);
    assert_eq!(doctor.about, "");
    assert!(!doctor.available);
}

#[test]
fn test_doctor_serializes_underscore_id() {
    let doctor: Doctor = from_str(
        r#"{"_id":"doc3","name":"Dr. Sarah Patel","speciality":"Dermatologist","degree":"MBBS","experience":"1 Years","fees":30}"#,
    )
    .unwrap();

    let json = to_string(&doctor).expect("Failed to serialize doctor");

    assert!(json.contains(r#""_id":"doc3""#));
}

#[test]
fn test_day_slots_lookup() {
    let day = DaySlots {
        date: instant(4, 0, 0).date(),
        slots: vec![
            TimeSlot { instant: instant(4, 10, 0), label: "10:00 AM".to_string() },
            TimeSlot { instant: instant(4, 10, 30), label: "10:30 AM".to_string() },
        ],
    };

    assert_eq!(day.len(), 2);
    assert!(day.contains(instant(4, 10, 30)));
    assert!(!day.contains(instant(4, 11, 0)));
    assert!(DaySlots::empty(day.date).is_empty());
}

#[test]
fn test_week_slots_find() {
    let week = generate_week(instant(4, 8, 0), &BusinessHours::default());

    let (offset, slot) = week.find(instant(6, 14, 30)).expect("slot should be offered");
    assert_eq!(offset, 2);
    assert_eq!(slot.label, "02:30 PM");
    assert!(week.find(instant(6, 21, 0)).is_none());
}

#[test]
fn test_week_slots_json_keeps_seven_days() {
    let week = generate_week(instant(4, 8, 0), &BusinessHours::default());

    let json = to_string(&week).expect("Failed to serialize week");
    let deserialized: WeekSlots = from_str(&json).expect("Failed to deserialize week");

    assert_eq!(deserialized, week);
}

#[test]
fn test_week_slots_rejects_wrong_length() {
    let days = vec![DaySlots::empty(instant(4, 0, 0).date()); 3];

    assert!(WeekSlots::try_from(days.clone()).is_err());
    assert!(from_str::<WeekSlots>(&to_string(&days).unwrap()).is_err());
}

#[test]
fn test_booking_request_from_slot() {
    let slot = TimeSlot { instant: instant(5, 15, 0), label: "03:00 PM".to_string() };

    let request = BookingRequest::new("doc1", &slot);

    assert_eq!(request.doctor_id, "doc1");
    assert_eq!(request.instant, slot.instant);
    assert_eq!(request.label, slot.label);
}

#[test]
fn test_booking_confirmation_serialization() {
    let confirmation = BookingConfirmation {
        id: Uuid::new_v4(),
        doctor_id: "doc1".to_string(),
        instant: instant(5, 15, 0),
        submitted_at: Utc::now(),
    };

    let json = to_string(&confirmation).expect("Failed to serialize confirmation");
    let deserialized: BookingConfirmation = from_str(&json).expect("Failed to deserialize confirmation");

    assert_eq!(deserialized, confirmation);
}

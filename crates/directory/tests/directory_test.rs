use std::io::Write;

use docslot_core::models::doctor::Doctor;
use docslot_directory::{
    load_directory,
    repositories::doctor::{DoctorDirectory, InMemoryDirectory, related_doctors},
};
use fake::{Fake, faker::name::en::Name};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn doctor(id: &str, speciality: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: format!("Dr. {}", Name().fake::<String>()),
        image: None,
        degree: "MBBS".to_string(),
        speciality: speciality.to_string(),
        experience: "4 Years".to_string(),
        about: String::new(),
        fees: (20..100).fake::<u32>(),
        available: true,
    }
}

fn clinic() -> InMemoryDirectory {
    InMemoryDirectory::new(vec![
        doctor("doc1", "General physician"),
        doctor("doc2", "Gynecologist"),
        doctor("doc3", "General physician"),
        doctor("doc4", "Dermatologist"),
        doctor("doc5", "General physician"),
    ])
}

#[test]
fn test_find_by_id() {
    let directory = clinic();

    let found = directory.find_by_id("doc2").expect("doc2 should exist");
    assert_eq!(found.speciality, "Gynecologist");
    assert!(directory.find_by_id("doc42").is_none());
}

#[test]
fn test_duplicate_ids_keep_first_record() {
    let mut first = doctor("doc1", "General physician");
    first.fees = 10;
    let mut second = doctor("doc1", "Neurologist");
    second.fees = 90;

    let directory = InMemoryDirectory::new(vec![first, second]);

    assert_eq!(directory.len(), 1);
    assert_eq!(directory.find_by_id("doc1").unwrap().fees, 10);
}

#[rstest]
#[case("doc1", "General physician", 10, vec!["doc3", "doc5"])]
#[case("doc1", "General physician", 1, vec!["doc3"])]
#[case("doc4", "Dermatologist", 10, vec![])]
#[case("doc9", "Gynecologist", 10, vec!["doc2"])]
fn test_related_doctors(
    #[case] exclude_id: &str,
    #[case] speciality: &str,
    #[case] limit: usize,
    #[case] expected: Vec<&str>,
) {
    let directory = clinic();

    let related = related_doctors(&directory, speciality, exclude_id, limit);

    let ids: Vec<&str> = related.iter().map(|doctor| doctor.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_from_json_rejects_malformed_records() {
    assert!(InMemoryDirectory::from_json(r#"[{"_id": "doc1"}]"#).is_err());
    assert!(InMemoryDirectory::from_json("not json").is_err());
}

#[tokio::test]
async fn test_load_directory_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"[
            {{"_id": "doc1", "name": "Dr. Richard James", "speciality": "General physician",
              "degree": "MBBS", "experience": "4 Years", "about": "", "fees": 50}},
            {{"_id": "doc2", "name": "Dr. Emily Larson", "speciality": "Gynecologist",
              "degree": "MBBS", "experience": "3 Years", "about": "", "fees": 60}}
        ]"#
    )
    .expect("Failed to write directory");

    let directory = load_directory(file.path()).await.expect("Failed to load directory");

    assert_eq!(directory.len(), 2);
    assert_eq!(directory.find_by_id("doc1").unwrap().name, "Dr. Richard James");
}

#[tokio::test]
async fn test_load_directory_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let result = load_directory(dir.path().join("missing.json")).await;

    let message = format!("{:?}", result.unwrap_err());
    assert!(message.contains("Failed to read doctor directory"));
}

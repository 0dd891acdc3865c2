use std::{collections::BTreeSet, path::Path};

use chrono::{DateTime, Utc};
use folio_archive_contracts::ArchiveService;
use folio_archive_csv::CsvArchive;
use folio_models::submission::{Submission, SubmissionCandidate, SubmissionRecord};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn round_trip_preserves_field_content() {
    let dir = tempfile::tempdir().unwrap();
    let archive = CsvArchive::new(dir.path().join("messages.csv"));

    let records = vec![
        record("2025-03-01T12:00:00Z", "Ana", "a@x.com", "Hi", "Test"),
        record(
            "2025-03-01T12:01:00Z",
            "Durand, Pierre",
            "pierre@example.fr",
            "Re: \"offer\"",
            "First line\nsecond line, with a comma\nand \"quotes\"",
        ),
        record(
            "2025-03-01T12:02:00Z",
            "Syrine",
            "syrine@example.com",
            "Félicitations ✨",
            "Accents: é à ç — and beyond",
        ),
    ];

    for record in &records {
        archive.append(record.clone()).await.unwrap();
    }

    assert_eq!(read_back(archive.path()), records);
}

#[tokio::test]
async fn header_is_written_exactly_once_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.csv");

    let archive = CsvArchive::new(&path);
    archive
        .append(record(
            "2025-03-01T12:00:00Z",
            "Ana",
            "a@x.com",
            "first",
            "one",
        ))
        .await
        .unwrap();
    drop(archive);

    // a fresh handle against the same file must not repeat the header
    let archive = CsvArchive::new(&path);
    archive
        .append(record(
            "2025-03-01T12:05:00Z",
            "Ana",
            "a@x.com",
            "second",
            "two",
        ))
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "timestamp,name,email,subject,message");
    assert_eq!(
        lines
            .iter()
            .filter(|line| **line == "timestamp,name,email,subject,message")
            .count(),
        1
    );
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn ping_succeeds_on_missing_file_and_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("messages.csv");
    let archive = CsvArchive::new(&path);

    archive.ping().await.unwrap();

    archive
        .append(record(
            "2025-03-01T12:00:00Z",
            "Ana",
            "a@x.com",
            "Hi",
            "Test",
        ))
        .await
        .unwrap();
    assert_eq!(read_back(&path).len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_produce_exactly_n_well_formed_rows() {
    const N: usize = 50;

    let dir = tempfile::tempdir().unwrap();
    let archive = CsvArchive::new(dir.path().join("messages.csv"));

    let tasks = (0..N)
        .map(|i| {
            let archive = archive.clone();
            tokio::spawn(async move {
                archive
                    .append(record(
                        "2025-03-01T12:00:00Z",
                        "Ana",
                        "a@x.com",
                        &format!("msg-{i}"),
                        "line one\nline two, with a comma",
                    ))
                    .await
                    .unwrap();
            })
        })
        .collect::<Vec<_>>();
    for task in tasks {
        task.await.unwrap();
    }

    let rows = read_back(archive.path());
    assert_eq!(rows.len(), N);
    let subjects = rows
        .iter()
        .map(|row| row.subject.clone().into_inner())
        .collect::<BTreeSet<_>>();
    let expected = (0..N).map(|i| format!("msg-{i}")).collect::<BTreeSet<_>>();
    assert_eq!(subjects, expected);
}

fn record(
    timestamp: &str,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> SubmissionRecord {
    let submission = Submission::try_from(SubmissionCandidate {
        name: name.into(),
        email: email.into(),
        subject: subject.into(),
        message: message.into(),
    })
    .unwrap();
    SubmissionRecord::new(timestamp.parse::<DateTime<Utc>>().unwrap(), submission)
}

fn read_back(path: &Path) -> Vec<SubmissionRecord> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .unwrap()
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap()
}

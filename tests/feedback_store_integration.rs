//! Integration tests for the feedback store
//! These tests verify provisioning, repositories, and connection lifecycle on a real file.

use chrono::NaiveDate;
use echobox::domain::{AdminCredential, FeedbackCategory, FeedbackEntry};
use echobox::infra::db::Database;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_full_feedback_workflow() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("feedback.db");

    let db = Database::open_at(path.clone())?;

    // The seed admin works immediately after first provisioning.
    let seed = AdminCredential::seed();
    let admin = db.admin_repo();
    assert!(admin.authenticate(&seed.username, &seed.password)?);
    assert!(!admin.authenticate(&seed.username, "wrong")?);

    let repo = db.feedback_repo();
    assert!(repo.insert(&FeedbackEntry::new(
        FeedbackCategory::Facility,
        "The library needs more seats",
        3,
        date("2024-05-20"),
    ))?);
    assert!(repo.insert(&FeedbackEntry::new(
        FeedbackCategory::Teacher,
        "Lectures start late most days",
        2,
        date("2024-05-22"),
    ))?);

    let all = repo.list_all()?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].submitted_on, date("2024-05-22"));

    let facilities = repo.list_by_category("Facility")?;
    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].message, "The library needs more seats");

    assert!(repo.delete_by_id(facilities[0].id)?);
    assert!(!repo.delete_by_id(facilities[0].id)?);
    assert_eq!(repo.list_all()?.len(), 1);

    db.close();
    Ok(())
}

#[test]
fn test_reopening_preserves_rows_and_seed() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("feedback.db");

    let db = Database::open_at(path.clone())?;
    assert!(db.feedback_repo().insert(&FeedbackEntry::new(
        FeedbackCategory::Other,
        "Please add a second water fountain",
        4,
        date("2024-06-01"),
    ))?);
    db.close();
    drop(db);

    // A second startup re-runs provisioning; existing rows must survive
    // and the seed row must not be duplicated.
    let db = Database::open_at(path)?;
    let all = db.feedback_repo().list_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].message, "Please add a second water fountain");
    assert!(db.admin_repo().authenticate("admin", "admin123")?);

    Ok(())
}

#[test]
fn test_operations_reopen_after_close() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = Database::open_at(dir.path().join("feedback.db"))?;
    let repo = db.feedback_repo();

    assert!(repo.insert(&FeedbackEntry::new(
        FeedbackCategory::Event,
        "The schedule was well organized",
        5,
        date("2024-07-04"),
    ))?);

    // Closing releases the handle; the next call reopens it transparently.
    db.close();
    let all = repo.list_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].rating, 5);

    Ok(())
}

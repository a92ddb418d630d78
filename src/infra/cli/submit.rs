//! Anonymous feedback submission.

use anyhow::{Result, bail};
use chrono::Local;

use crate::domain::{FeedbackCategory, FeedbackEntry};
use crate::infra::db::Database;

/// Minimum message length after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Validate and persist one anonymous feedback entry, dated today.
pub fn submit_feedback(
    db: &Database,
    category: FeedbackCategory,
    rating: i32,
    message: &str,
) -> Result<()> {
    let message = message.trim();
    if message.is_empty() {
        bail!("please enter a feedback message");
    }
    if message.chars().count() < MIN_MESSAGE_LEN {
        bail!("feedback message should be at least {MIN_MESSAGE_LEN} characters long");
    }
    if !(1..=5).contains(&rating) {
        bail!("rating must be between 1 and 5");
    }

    let entry = FeedbackEntry::new(category, message, rating, Local::now().date_naive());
    if !db.feedback_repo().insert(&entry)? {
        bail!("failed to submit feedback, please try again");
    }

    println!("Thank you for your feedback! It has been submitted anonymously.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_rejects_short_message() {
        let db = Database::open_in_memory().unwrap();
        let err = submit_feedback(&db, FeedbackCategory::Other, 4, "  too short  ")
            .unwrap_err()
            .to_string();
        assert!(err.contains("at least 10 characters"));
        assert!(db.feedback_repo().list_all().unwrap().is_empty());
    }

    #[test]
    fn test_submit_rejects_blank_message() {
        let db = Database::open_in_memory().unwrap();
        assert!(submit_feedback(&db, FeedbackCategory::Other, 4, "   ").is_err());
    }

    #[test]
    fn test_submit_rejects_out_of_range_rating() {
        let db = Database::open_in_memory().unwrap();
        assert!(submit_feedback(&db, FeedbackCategory::Event, 0, "a perfectly fine message").is_err());
        assert!(submit_feedback(&db, FeedbackCategory::Event, 6, "a perfectly fine message").is_err());
    }

    #[test]
    fn test_submit_trims_and_persists() {
        let db = Database::open_in_memory().unwrap();
        submit_feedback(&db, FeedbackCategory::Facility, 3, "  the lab chairs squeak  ").unwrap();

        let all = db.feedback_repo().list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].message, "the lab chairs squeak");
        assert_eq!(all[0].category, FeedbackCategory::Facility);
    }
}

//! Admin console: authenticate, list/filter, delete.

use anyhow::{Result, bail};
use std::str::FromStr;

use crate::domain::{FeedbackCategory, FeedbackEntry};
use crate::infra::db::Database;

/// Gate every admin action behind a credential check.
///
/// A store failure propagates as an error; only a genuine mismatch is
/// reported as an invalid login.
fn require_admin(db: &Database, username: &str, password: &str) -> Result<()> {
    if !db.admin_repo().authenticate(username, password)? {
        bail!("invalid username or password");
    }
    Ok(())
}

/// List entries, newest first, optionally filtered to one category.
pub fn list_entries(
    db: &Database,
    username: &str,
    password: &str,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    require_admin(db, username, password)?;

    let repo = db.feedback_repo();
    let entries = match category {
        Some(category) => repo.list_by_category(&canonical_filter(category))?,
        None => repo.list_all()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No feedback entries.");
        return Ok(());
    }

    print_table(&entries);
    Ok(())
}

/// Delete one entry by id, reporting whether anything was removed.
pub fn delete_entry(db: &Database, username: &str, password: &str, id: i64) -> Result<()> {
    require_admin(db, username, password)?;

    if db.feedback_repo().delete_by_id(id)? {
        println!("Deleted feedback entry {id}.");
    } else {
        println!("No feedback entry with id {id}.");
    }
    Ok(())
}

/// Map a filter to the stored label when it names a known category.
///
/// Entries are stored with capitalized labels, while the CLI accepts the
/// same lowercase tokens `submit` does. Strings outside the fixed set pass
/// through verbatim and match nothing.
fn canonical_filter(category: &str) -> String {
    FeedbackCategory::from_str(category)
        .map(|category| category.to_string())
        .unwrap_or_else(|_| category.to_string())
}

fn print_table(entries: &[FeedbackEntry]) {
    println!(
        "{:>5}  {:<10}  {:>6}  {:<10}  {}",
        "ID", "Category", "Rating", "Date", "Message"
    );
    for entry in entries {
        println!(
            "{:>5}  {:<10}  {:>6}  {:<10}  {}",
            entry.id,
            entry.category.to_string(),
            entry.rating,
            entry.submitted_on.to_string(),
            entry.message,
        );
    }
}

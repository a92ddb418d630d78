use super::DbHandle;
use crate::domain::{FeedbackCategory, FeedbackEntry};
use crate::infra::db::error::StorageError;
use chrono::NaiveDate;
use rusqlite::Row;

use std::str::FromStr;

const SELECT_COLUMNS: &str = "id, category, message, rating, date_submitted";

/// Data access for the `feedback` table.
///
/// Performs no input validation: category membership, rating range, and
/// minimum message length are the calling layer's contract. Anything
/// supplied is persisted as-is.
pub struct FeedbackRepository {
    db: DbHandle,
}

impl FeedbackRepository {
    pub(crate) fn new(db: DbHandle) -> Self {
        Self { db }
    }

    /// Persist a new entry, letting the store assign the id.
    ///
    /// Returns true iff exactly one row was written.
    pub fn insert(&self, entry: &FeedbackEntry) -> Result<bool, StorageError> {
        self.db.with_conn(|conn| {
            let written = conn.execute(
                "INSERT INTO feedback (category, message, rating, date_submitted)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![
                    entry.category.to_string(),
                    entry.message,
                    entry.rating,
                    entry.submitted_on.to_string(),
                ],
            )?;
            Ok(written == 1)
        })
    }

    /// Every entry, most recent first.
    pub fn list_all(&self) -> Result<Vec<FeedbackEntry>, StorageError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM feedback
                 ORDER BY date_submitted DESC, id DESC"
            ))?;
            let rows = stmt.query_map([], Self::row_to_entry)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Entries matching `category` exactly, most recent first.
    ///
    /// An unknown category yields an empty vec, not an error.
    pub fn list_by_category(&self, category: &str) -> Result<Vec<FeedbackEntry>, StorageError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM feedback
                 WHERE category = ?1
                 ORDER BY date_submitted DESC, id DESC"
            ))?;
            let rows = stmt.query_map([category], Self::row_to_entry)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Remove the entry with the given id.
    ///
    /// Returns true iff exactly one row was removed; false when no such id
    /// exists, which is not an error condition.
    pub fn delete_by_id(&self, id: i64) -> Result<bool, StorageError> {
        self.db.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM feedback WHERE id = ?1", [id])?;
            Ok(removed == 1)
        })
    }

    fn row_to_entry(row: &Row) -> rusqlite::Result<FeedbackEntry> {
        let category: String = row.get(1)?;
        let date: String = row.get(4)?;
        let submitted_on = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                Box::new(err),
            )
        })?;

        Ok(FeedbackEntry {
            id: row.get(0)?,
            // Rows written by other tooling may carry a label outside the
            // fixed set; fold those into Other instead of failing the listing.
            category: FeedbackCategory::from_str(&category).unwrap_or_default(),
            message: row.get(2)?,
            rating: row.get(3)?,
            submitted_on,
        })
    }
}

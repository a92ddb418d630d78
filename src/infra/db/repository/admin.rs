use super::DbHandle;
use crate::infra::db::error::StorageError;

/// Data access for the `admin` table.
pub struct AdminRepository {
    db: DbHandle,
}

impl AdminRepository {
    pub(crate) fn new(db: DbHandle) -> Self {
        Self { db }
    }

    /// Check a credential pair against the admin table.
    ///
    /// Exact, case-sensitive match on both columns. A missing row is a
    /// normal `Ok(false)`; an `Err` means the store itself failed and must
    /// not be reported to the user as a failed login.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, StorageError> {
        self.db.with_conn(|conn| {
            let matches: i64 = conn.query_row(
                "SELECT COUNT(*) FROM admin WHERE username = ?1 AND password = ?2",
                rusqlite::params![username, password],
                |row| row.get(0),
            )?;
            Ok(matches > 0)
        })
    }
}

//! SQLite database setup and connection management for echobox
//! Handles schema provisioning, the seed admin credential, and connection lifecycle.

use crate::domain::AdminCredential;
use crate::infra::db::error::StorageError;
use crate::infra::db::repository::{AdminRepository, FeedbackRepository};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared handle the repositories are constructed with.
pub(crate) type DbHandle = Arc<Store>;

#[derive(Debug, Clone)]
enum Location {
    OnDisk(PathBuf),
    InMemory,
}

/// Connection state shared between [`Database`] and the repositories.
///
/// Holds at most one open connection. Operations go through [`Store::with_conn`],
/// which reopens the file (and re-runs provisioning) if the handle was closed.
pub(crate) struct Store {
    location: Location,
    conn: Mutex<Option<Connection>>,
}

/// Single point of access to the feedback database.
pub struct Database {
    store: DbHandle,
}

impl Database {
    /// Create or open the database at the default location
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(Self::default_path())
    }

    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_location(Location::InMemory)
    }

    /// Create or open the database at a specific path
    pub fn open_at(path: PathBuf) -> Result<Self, StorageError> {
        Self::with_location(Location::OnDisk(path))
    }

    fn with_location(location: Location) -> Result<Self, StorageError> {
        let db = Self {
            store: Arc::new(Store {
                location,
                conn: Mutex::new(None),
            }),
        };
        // Open eagerly so a bad path fails at startup, not on the first query.
        db.store.with_conn(|_| Ok(()))?;
        Ok(db)
    }

    /// Get the default database path
    fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("ECHOBOX_DB_PATH") {
            return PathBuf::from(path);
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(home) = home::home_dir() {
                return home
                    .join("Library")
                    .join("Application Support")
                    .join("echobox")
                    .join("feedback.db");
            }
        }

        #[cfg(target_os = "windows")]
        {
            if let Some(appdata) = std::env::var_os("APPDATA") {
                return PathBuf::from(appdata).join("echobox").join("feedback.db");
            }
        }

        #[cfg(target_os = "linux")]
        {
            if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
                return PathBuf::from(xdg).join("echobox").join("feedback.db");
            }
            if let Some(home) = home::home_dir() {
                return home
                    .join(".local")
                    .join("share")
                    .join("echobox")
                    .join("feedback.db");
            }
        }

        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".echobox")
            .join("feedback.db")
    }

    pub fn feedback_repo(&self) -> FeedbackRepository {
        FeedbackRepository::new(self.store.clone())
    }

    pub fn admin_repo(&self) -> AdminRepository {
        AdminRepository::new(self.store.clone())
    }

    /// Release the connection if one is open.
    ///
    /// Safe to call when already closed. A failing close is logged rather
    /// than raised since there is no recovery action for it. Closing an
    /// in-memory database discards its contents.
    pub fn close(&self) {
        let mut guard = self.store.conn.lock().unwrap();
        if let Some(conn) = guard.take() {
            if let Err((_conn, err)) = conn.close() {
                log::warn!("failed to close database cleanly: {err}");
            }
        }
    }
}

impl Store {
    /// Run `f` against the live connection, opening one first if needed.
    pub(crate) fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut guard = self.conn.lock().unwrap();
        if guard.is_none() {
            *guard = Some(self.open_connection()?);
        }
        f(guard.as_ref().unwrap())
    }

    fn open_connection(&self) -> Result<Connection, StorageError> {
        let conn = match &self.location {
            Location::OnDisk(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|err| StorageError::Unavailable(err.to_string()))?;
                }
                log::debug!("opening feedback database at {}", path.display());
                Connection::open(path).map_err(|err| StorageError::Unavailable(err.to_string()))?
            }
            Location::InMemory => Connection::open_in_memory()
                .map_err(|err| StorageError::Unavailable(err.to_string()))?,
        };
        Self::provision(&conn)?;
        Ok(conn)
    }

    /// Create both tables and the seed admin row. Safe to run on every open.
    fn provision(conn: &Connection) -> Result<(), StorageError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS admin (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT,
                password TEXT
            );

            CREATE TABLE IF NOT EXISTS feedback (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT,
                message TEXT,
                rating INTEGER,
                date_submitted TEXT
            );
            "#,
        )?;

        let seed = AdminCredential::seed();
        conn.execute(
            "INSERT OR IGNORE INTO admin (id, username, password) VALUES (?1, ?2, ?3)",
            rusqlite::params![seed.id, seed.username, seed.password],
        )?;
        Ok(())
    }
}

//! SQLite persistence (infrastructure).

pub mod database;
pub mod error;
pub mod repository;

pub use database::Database;
pub use error::StorageError;
pub use repository::{AdminRepository, FeedbackRepository};

//! Repository implementations for data access in echobox.
//!
//! Provides database operations for feedback entries and admin credentials.
//! Repositories are handed their store handle explicitly by [`Database`];
//! there is no process-global connection state.
//!
//! [`Database`]: crate::infra::db::Database

mod admin;
mod feedback;

pub use admin::AdminRepository;
pub use feedback::FeedbackRepository;

pub(super) use super::database::DbHandle;

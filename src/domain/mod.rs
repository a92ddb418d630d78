//! Domain types for the echobox feedback system
//! Defines the core data structures shared by the store and the terminal interface.

pub mod admin;
pub mod feedback;

pub use admin::*;
pub use feedback::*;

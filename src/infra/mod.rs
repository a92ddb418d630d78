//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (SQLite, terminal interface).

pub mod cli;
pub mod db;

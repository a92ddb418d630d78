//! CLI infrastructure for echobox.
//!
//! Command handlers for submitting feedback and for the admin console.
//! All input validation lives here: the repositories persist whatever
//! they are handed, so this layer must reject bad input first.

pub mod admin;
pub mod submit;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a feedback entry is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FeedbackCategory {
    /// Feedback about a teacher or a course
    Teacher,
    /// Feedback about an organized event
    Event,
    /// Feedback about buildings and equipment
    Facility,
    /// Anything that fits nowhere else
    #[default]
    Other,
}

impl FeedbackCategory {
    /// Every selectable category, in the order shown to users.
    pub const ALL: [FeedbackCategory; 4] = [
        FeedbackCategory::Teacher,
        FeedbackCategory::Event,
        FeedbackCategory::Facility,
        FeedbackCategory::Other,
    ];
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teacher => write!(f, "Teacher"),
            Self::Event => write!(f, "Event"),
            Self::Facility => write!(f, "Facility"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for FeedbackCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "teacher" => Ok(Self::Teacher),
            "event" => Ok(Self::Event),
            "facility" => Ok(Self::Facility),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "unknown category '{s}' (expected teacher, event, facility or other)"
            )),
        }
    }
}

/// One stored feedback submission.
///
/// Entries are anonymous by construction: there is no submitter field
/// anywhere in the model or the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Assigned by the store on insert; 0 for an entry not yet persisted
    pub id: i64,
    /// Category the entry is filed under
    pub category: FeedbackCategory,
    /// Free-text feedback message
    pub message: String,
    /// Star rating, 1 to 5 by the submission contract
    pub rating: i32,
    /// Submission date, day granularity
    pub submitted_on: NaiveDate,
}

impl FeedbackEntry {
    /// Build a not-yet-persisted entry; the store assigns the id on insert.
    pub fn new(
        category: FeedbackCategory,
        message: impl Into<String>,
        rating: i32,
        submitted_on: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            category,
            message: message.into(),
            rating,
            submitted_on,
        }
    }
}

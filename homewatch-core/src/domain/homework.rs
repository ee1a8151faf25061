//! Homework domain types
//!
//! A `HomeworkRecord` is one reviewed-work entry from the API. Its `status`
//! field stays a raw string on the wire because the server may send codes we
//! do not recognize; `ReviewStatus` is the closed set we know how to verbalize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One submission entry as returned by the review API
///
/// Both fields the watcher cares about are optional: malformed entries are
/// reported through [`StatusError`] rather than rejected at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,
}

impl HomeworkRecord {
    /// Resolves the record's status into a human-readable verdict
    ///
    /// A missing status field and an unrecognized status code are distinct
    /// failures; the caller decides whether to fall back or to skip.
    pub fn verdict(&self) -> Result<&'static str, StatusError> {
        let status = self.status.as_deref().ok_or(StatusError::MissingStatus)?;
        ReviewStatus::parse(status)
            .map(ReviewStatus::verdict)
            .ok_or_else(|| StatusError::Unrecognized(status.to_string()))
    }

    /// Name for log lines; records without one are still processed
    pub fn display_name(&self) -> &str {
        self.homework_name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// A reviewer has picked the work up
    Reviewing,

    /// Reviewed, no remarks
    Approved,

    /// Reviewed, changes requested
    Rejected,
}

impl ReviewStatus {
    /// Verdict sent when the status code is not in the known set
    pub const FALLBACK_VERDICT: &'static str = "The work has an unknown review status.";

    /// Maps a wire status code to the known set, `None` if unrecognized
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "reviewing" => Some(Self::Reviewing),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// The fixed human-readable verdict for this status
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Reviewing => "The work was taken up for review.",
            Self::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Rejected => "The work has been reviewed: the reviewer has remarks.",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Failure to resolve a record's status into a verdict
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The record carries no status field at all
    #[error("record has no status field")]
    MissingStatus,

    /// The status code is not in the known set
    #[error("unrecognized review status: {0}")]
    Unrecognized(String),
}

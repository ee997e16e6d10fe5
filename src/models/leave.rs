//! Leave entry model.
//!
//! A [`LeaveEntry`] records that one employee is off on one calendar day.
//! Entries are only ever created through the leave rule engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A request to put an employee on leave for a day.
///
/// `slot` and `week_start` are carried through without validation; they are
/// display and grouping aids for clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSubmission {
    /// The roster id of the employee.
    pub employee_id: String,
    /// The day of leave.
    pub date: NaiveDate,
    /// The first day of the week the entry is grouped under.
    pub week_start: NaiveDate,
    /// Position within the day's leave roster (nominally 0-6).
    pub slot: i64,
}

/// A stored leave entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// Generated unique identifier.
    pub id: String,
    /// The roster id of the employee.
    pub employee_id: String,
    /// The day of leave.
    pub date: NaiveDate,
    /// The first day of the week the entry is grouped under.
    pub week_start: NaiveDate,
    /// Position within the day's leave roster.
    pub slot: i64,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl LeaveEntry {
    /// Builds a stored entry from an accepted submission.
    pub fn from_submission(
        submission: LeaveSubmission,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            employee_id: submission.employee_id,
            date: submission.date,
            week_start: submission.week_start,
            slot: submission.slot,
            created_at,
        }
    }
}

//! Overtime and typed-leave recording.
//!
//! These record kinds have no cross-record rules: the employee must exist,
//! and compensatory leave must carry hours.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{LeaveTypeEntry, LeaveTypeSubmission, OvertimeEntry, OvertimeSubmission};
use crate::roster::Roster;
use crate::store::RecordStore;

/// Checks a typed-leave submission.
///
/// Compensatory leave with absent or zero hours is rejected; any other
/// value, however small, is accepted.
pub fn check_leave_type(submission: &LeaveTypeSubmission, roster: &Roster) -> TrackerResult<()> {
    roster.require(&submission.employee_id)?;
    if submission.leave_type.requires_hours()
        && submission.hours.is_none_or(|hours| hours == 0.0)
    {
        return Err(TrackerError::MissingHours);
    }
    Ok(())
}

/// Records overtime and typed-leave entries.
pub struct EntryRecorder {
    roster: Arc<Roster>,
    records: RecordStore,
    clock: Arc<dyn Clock>,
}

impl EntryRecorder {
    /// Creates a recorder.
    pub fn new(roster: Arc<Roster>, records: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            roster,
            records,
            clock,
        }
    }

    /// Validates and stores an overtime entry.
    pub async fn record_overtime(
        &self,
        submission: OvertimeSubmission,
    ) -> TrackerResult<OvertimeEntry> {
        self.roster.require(&submission.employee_id)?;

        let entry =
            OvertimeEntry::from_submission(submission, Uuid::new_v4().to_string(), self.clock.now());
        self.records.insert(&entry).await?;

        info!(
            overtime_id = %entry.id,
            employee_id = %entry.employee_id,
            date = %entry.date,
            hours = entry.hours,
            "overtime entry recorded"
        );
        Ok(entry)
    }

    /// Validates and stores a typed-leave entry.
    pub async fn record_leave_type(
        &self,
        submission: LeaveTypeSubmission,
    ) -> TrackerResult<LeaveTypeEntry> {
        check_leave_type(&submission, &self.roster)?;

        let entry = LeaveTypeEntry::from_submission(
            submission,
            Uuid::new_v4().to_string(),
            self.clock.now(),
        );
        self.records.insert(&entry).await?;

        info!(
            leave_type_id = %entry.id,
            employee_id = %entry.employee_id,
            date = %entry.date,
            leave_type = ?entry.leave_type,
            "leave type entry recorded"
        );
        Ok(entry)
    }
}

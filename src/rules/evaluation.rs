//! Leave admission pipeline.
//!
//! [`evaluate`] decides whether a leave submission may be admitted given the
//! leave already recorded for its day. It is pure: the caller supplies the
//! day's state and "today".

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{LeaveEntry, LeaveSubmission};
use crate::roster::Roster;

use super::policy::LeavePolicy;

/// Who is already on leave for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySnapshot {
    date: NaiveDate,
    employee_ids: Vec<String>,
}

impl DaySnapshot {
    /// Builds a snapshot from the stored entries for `date`.
    pub fn from_entries(date: NaiveDate, entries: &[LeaveEntry]) -> Self {
        Self::from_employees(date, entries.iter().map(|e| e.employee_id.clone()))
    }

    /// Builds a snapshot from the ids of employees on leave.
    ///
    /// An id may appear more than once if the store already holds duplicates;
    /// each occurrence counts towards the cap.
    pub fn from_employees<I, S>(date: NaiveDate, employee_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date,
            employee_ids: employee_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// The day this snapshot describes.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Number of leave entries on the day.
    pub fn count(&self) -> usize {
        self.employee_ids.len()
    }

    /// Returns true if the employee has a leave entry on the day.
    pub fn has_leave(&self, employee_id: &str) -> bool {
        self.employee_ids.iter().any(|id| id == employee_id)
    }
}

/// Runs the admission checks in order; the first failure wins.
///
/// 1. the employee must be on the roster
/// 2. the date must not be today
/// 3. the exclusive-pair partner must not be off that day
/// 4. the day must be under its cap (reduced while the capacity lead is off)
/// 5. the employee must not already be off that day
///
/// `slot` and `week_start` are not checked.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use leave_tracker::error::TrackerError;
/// use leave_tracker::models::LeaveSubmission;
/// use leave_tracker::roster::Roster;
/// use leave_tracker::rules::{evaluate, DaySnapshot, LeavePolicy};
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
/// let submission = LeaveSubmission {
///     employee_id: "busra".to_string(),
///     date,
///     week_start: date,
///     slot: 3,
/// };
///
/// // The lead is off and three people are already out: the reduced cap applies.
/// let day = DaySnapshot::from_employees(date, ["ayca_cisem", "enis", "onur"]);
/// let result = evaluate(&submission, &day, &Roster::standard(), &LeavePolicy::default(), today);
/// assert!(matches!(result, Err(TrackerError::SlotLimitReached { limit: 3 })));
/// ```
pub fn evaluate(
    submission: &LeaveSubmission,
    day: &DaySnapshot,
    roster: &Roster,
    policy: &LeavePolicy,
    today: NaiveDate,
) -> TrackerResult<()> {
    debug_assert_eq!(submission.date, day.date());

    let employee = roster.require(&submission.employee_id)?;

    if submission.date == today {
        return Err(TrackerError::SameDayLeave);
    }

    if let Some(partner_id) = policy.exclusive_partner(&employee.id) {
        if day.has_leave(partner_id) {
            let partner = roster
                .lookup(partner_id)
                .map_or_else(|| partner_id.to_string(), |p| p.name.clone());
            return Err(TrackerError::ExclusivePairConflict {
                employee: employee.name.clone(),
                partner,
            });
        }
    }

    let limit = policy.daily_cap(day.has_leave(&policy.capacity_lead));
    if day.count() >= limit {
        return Err(TrackerError::SlotLimitReached { limit });
    }

    if day.has_leave(&employee.id) {
        return Err(TrackerError::AlreadyOnLeave);
    }

    Ok(())
}

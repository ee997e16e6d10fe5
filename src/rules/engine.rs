//! The leave rule engine.
//!
//! Admits or rejects leave submissions against the roster and the leave
//! already stored for the target day, and persists admitted entries.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::TrackerResult;
use crate::models::{LeaveEntry, LeaveSubmission};
use crate::roster::Roster;
use crate::store::{Record, RecordStore};

use super::evaluation::{DaySnapshot, evaluate};
use super::locks::DateLocks;
use super::policy::LeavePolicy;

/// Validates and records leave entries.
///
/// Submissions for the same day are serialized so the daily cap and the
/// one-entry-per-employee-per-day rule hold for concurrent requests.
pub struct LeaveRuleEngine {
    roster: Arc<Roster>,
    policy: LeavePolicy,
    records: RecordStore,
    clock: Arc<dyn Clock>,
    locks: DateLocks,
}

impl LeaveRuleEngine {
    /// Creates an engine.
    pub fn new(
        roster: Arc<Roster>,
        policy: LeavePolicy,
        records: RecordStore,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            roster,
            policy,
            records,
            clock,
            locks: DateLocks::new(),
        }
    }

    /// The policy in force.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Admits a leave submission, returning the stored entry.
    ///
    /// Rejections come back as the first failing check of [`evaluate`];
    /// store failures propagate unchanged.
    pub async fn submit(&self, submission: LeaveSubmission) -> TrackerResult<LeaveEntry> {
        let _day_guard = self.locks.acquire(submission.date).await;

        let existing = self.records.leaves_on(submission.date).await?;
        let day = DaySnapshot::from_entries(submission.date, &existing);
        debug!(
            employee_id = %submission.employee_id,
            date = %submission.date,
            on_leave = day.count(),
            "evaluating leave submission"
        );

        evaluate(
            &submission,
            &day,
            &self.roster,
            &self.policy,
            self.clock.today(),
        )?;

        let entry = LeaveEntry::from_submission(
            submission,
            Uuid::new_v4().to_string(),
            self.clock.now(),
        );
        self.records.insert(&entry).await?;

        info!(
            leave_id = %entry.id(),
            employee_id = %entry.employee_id,
            date = %entry.date,
            slot = entry.slot,
            "leave entry recorded"
        );
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::TrackerError;
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn engine() -> (Arc<LeaveRuleEngine>, RecordStore) {
        let records = RecordStore::new(Arc::new(InMemoryStore::new()), 1000);
        let engine = LeaveRuleEngine::new(
            Arc::new(Roster::standard()),
            LeavePolicy::default(),
            records.clone(),
            Arc::new(FixedClock::on(date("2025-03-09"))),
        );
        (Arc::new(engine), records)
    }

    fn submission(employee_id: &str, day: &str, slot: i64) -> LeaveSubmission {
        LeaveSubmission {
            employee_id: employee_id.to_string(),
            date: date(day),
            week_start: date("2025-03-10"),
            slot,
        }
    }

    #[tokio::test]
    async fn test_accepted_submission_is_stored() {
        let (engine, records) = engine();
        let entry = engine
            .submit(submission("busra", "2025-03-10", 2))
            .await
            .unwrap();

        assert_eq!(entry.employee_id, "busra");
        assert_eq!(entry.slot, 2);
        assert!(!entry.id.is_empty());
        assert_eq!(records.leaves_on(date("2025-03-10")).await.unwrap(), vec![entry]);
    }

    #[tokio::test]
    async fn test_rejected_submission_is_not_stored() {
        let (engine, records) = engine();
        let result = engine.submit(submission("busra", "2025-03-09", 0)).await;
        assert!(matches!(result, Err(TrackerError::SameDayLeave)));
        assert!(records.list_leaves(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_entry_same_day_rejected_even_with_new_slot() {
        let (engine, _) = engine();
        engine.submit(submission("sila", "2025-03-10", 0)).await.unwrap();
        let result = engine.submit(submission("sila", "2025-03-10", 5)).await;
        assert!(matches!(result, Err(TrackerError::AlreadyOnLeave)));
    }

    #[tokio::test]
    async fn test_lead_leave_lowers_cap_for_later_submissions() {
        let (engine, _) = engine();
        for employee in ["ayca_cisem", "busra", "sila"] {
            engine
                .submit(submission(employee, "2025-03-11", 0))
                .await
                .unwrap();
        }
        let result = engine.submit(submission("kader", "2025-03-11", 3)).await;
        assert!(matches!(
            result,
            Err(TrackerError::SlotLimitReached { limit: 3 })
        ));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let (engine, _) = engine();
        let mut ids = HashSet::new();
        for (i, employee) in ["busra", "sila", "nergiz", "aysun"].iter().enumerate() {
            let day = format!("2025-03-{:02}", 10 + i);
            let entry = engine.submit(submission(employee, &day, 0)).await.unwrap();
            assert!(ids.insert(entry.id));
        }
    }

    #[tokio::test]
    async fn test_concurrent_submissions_respect_cap() {
        let (engine, records) = engine();
        let employees = [
            "enis", "onur", "busra", "sila", "nergiz", "aysun", "elif", "ebru", "kader",
        ];

        let handles: Vec<_> = employees
            .iter()
            .map(|employee| {
                let engine = engine.clone();
                let sub = submission(employee, "2025-03-12", 0);
                tokio::spawn(async move { engine.submit(sub).await })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 7);
        assert_eq!(records.leaves_on(date("2025-03-12")).await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_concurrent_duplicates_admit_one() {
        let (engine, records) = engine();
        let handles: Vec<_> = (0..5)
            .map(|slot| {
                let engine = engine.clone();
                let sub = submission("elif", "2025-03-13", slot);
                tokio::spawn(async move { engine.submit(sub).await })
            })
            .collect();

        for handle in handles {
            let _ = handle.await.unwrap();
        }
        assert_eq!(records.leaves_on(date("2025-03-13")).await.unwrap().len(), 1);
    }
}

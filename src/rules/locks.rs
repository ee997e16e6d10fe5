//! Per-date critical sections.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async lock per calendar day.
///
/// Leave admission reads a day's entries, decides, then writes. Holding the
/// day's lock across that sequence keeps two submissions for the same day
/// from both passing the capacity and duplicate checks.
#[derive(Debug, Default)]
pub struct DateLocks {
    locks: Mutex<HashMap<NaiveDate, Arc<AsyncMutex<()>>>>,
}

impl DateLocks {
    /// Creates an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for and takes the lock for `date`.
    pub async fn acquire(&self, date: NaiveDate) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            // drop entries nobody holds or waits on
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(date).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of days with a live lock entry.
    pub fn tracked_days(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

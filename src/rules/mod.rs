//! Admission rules for the tracker's records.
//!
//! Leave entries pass through the [`LeaveRuleEngine`]: roster check, the
//! same-day prohibition, the exclusive pair, the daily cap and duplicate
//! detection, in that order. Overtime and typed-leave entries are admitted
//! by the [`EntryRecorder`] with only per-record checks.

mod engine;
mod entries;
mod evaluation;
mod locks;
mod policy;

pub use engine::LeaveRuleEngine;
pub use entries::{EntryRecorder, check_leave_type};
pub use evaluation::{DaySnapshot, evaluate};
pub use locks::DateLocks;
pub use policy::{
    CAPACITY_LEAD_ID, DEFAULT_DAILY_CAP, EXCLUSIVE_PAIR, LeavePolicy, REDUCED_DAILY_CAP,
};

//! Team leave policy.
//!
//! The business constants that govern leave admission live here, apart from
//! the validation pipeline, so they can be read, tested and overridden from
//! configuration without touching control flow.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::roster::Roster;

/// Concurrent leave allowed on a normal day.
pub const DEFAULT_DAILY_CAP: usize = 7;

/// Concurrent leave allowed on a day the capacity lead is already off.
pub const REDUCED_DAILY_CAP: usize = 3;

/// The lead whose absence lowers the daily cap.
pub const CAPACITY_LEAD_ID: &str = "ayca_cisem";

/// The two employees who may not be on leave the same day.
pub const EXCLUSIVE_PAIR: [&str; 2] = ["rabia", "ayca_demir"];

/// Leave admission policy.
///
/// # Example
///
/// ```
/// use leave_tracker::rules::LeavePolicy;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(policy.daily_cap(false), 7);
/// assert_eq!(policy.daily_cap(true), 3);
/// assert_eq!(policy.exclusive_partner("rabia"), Some("ayca_demir"));
/// assert_eq!(policy.exclusive_partner("ayca_demir"), Some("rabia"));
/// assert_eq!(policy.exclusive_partner("busra"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Cap on leave entries per day.
    pub default_daily_cap: usize,
    /// Cap on leave entries per day while the capacity lead is off.
    pub reduced_daily_cap: usize,
    /// Roster id of the capacity lead.
    pub capacity_lead: String,
    /// Roster ids that exclude each other, if any.
    pub exclusive_pair: Option<[String; 2]>,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            default_daily_cap: DEFAULT_DAILY_CAP,
            reduced_daily_cap: REDUCED_DAILY_CAP,
            capacity_lead: CAPACITY_LEAD_ID.to_string(),
            exclusive_pair: Some(EXCLUSIVE_PAIR.map(str::to_string)),
        }
    }
}

impl LeavePolicy {
    /// The other member of the exclusive pair, if `employee_id` is in it.
    pub fn exclusive_partner(&self, employee_id: &str) -> Option<&str> {
        let [first, second] = self.exclusive_pair.as_ref()?;
        if employee_id == first.as_str() {
            Some(second.as_str())
        } else if employee_id == second.as_str() {
            Some(first.as_str())
        } else {
            None
        }
    }

    /// The cap that applies for a day, given whether the lead is off.
    pub fn daily_cap(&self, lead_on_leave: bool) -> usize {
        if lead_on_leave {
            self.reduced_daily_cap
        } else {
            self.default_daily_cap
        }
    }

    /// Checks the policy is consistent with itself and the roster.
    pub fn validate(&self, roster: &Roster) -> TrackerResult<()> {
        if self.default_daily_cap == 0 || self.reduced_daily_cap == 0 {
            return Err(invalid("daily caps must be positive"));
        }
        if self.reduced_daily_cap > self.default_daily_cap {
            return Err(invalid(format!(
                "reduced_daily_cap ({}) exceeds default_daily_cap ({})",
                self.reduced_daily_cap, self.default_daily_cap
            )));
        }
        if !roster.contains(&self.capacity_lead) {
            return Err(invalid(format!(
                "capacity_lead '{}' is not on the roster",
                self.capacity_lead
            )));
        }
        if let Some([first, second]) = &self.exclusive_pair {
            if first == second {
                return Err(invalid("exclusive_pair members must differ"));
            }
            for member in [first, second] {
                if !roster.contains(member) {
                    return Err(invalid(format!(
                        "exclusive_pair member '{member}' is not on the roster"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> TrackerError {
    TrackerError::ConfigInvalid {
        message: message.into(),
    }
}

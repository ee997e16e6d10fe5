//! Overtime entry model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A request to record overtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeSubmission {
    /// The roster id of the employee.
    pub employee_id: String,
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked; sign and magnitude are not constrained.
    pub hours: f64,
}

/// A stored overtime entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// Generated unique identifier.
    pub id: String,
    /// The roster id of the employee.
    pub employee_id: String,
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked.
    pub hours: f64,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl OvertimeEntry {
    /// Builds a stored entry from a submission.
    pub fn from_submission(
        submission: OvertimeSubmission,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            employee_id: submission.employee_id,
            date: submission.date,
            hours: submission.hours,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_accept_json_numbers() {
        let json = r#"{"employee_id": "onur", "date": "2025-03-11", "hours": 1.5}"#;
        let submission: OvertimeSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.hours, 1.5);
    }

    #[test]
    fn test_negative_hours_are_allowed() {
        let json = r#"{"employee_id": "onur", "date": "2025-03-11", "hours": -2}"#;
        let submission: OvertimeSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.hours, -2.0);
    }

    #[test]
    fn test_hours_serialize_as_number() {
        let submission = OvertimeSubmission {
            employee_id: "onur".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
            hours: 3.5,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["hours"], serde_json::json!(3.5));
    }

    #[test]
    fn test_hours_magnitude_is_not_bounded() {
        let json = r#"{"employee_id": "onur", "date": "2025-03-11", "hours": 1e30}"#;
        let submission: OvertimeSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.hours, 1e30);
    }
}

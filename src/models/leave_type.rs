//! Typed leave entry model.
//!
//! Typed leave entries classify a day off as unpaid, annual or
//! compensatory. Compensatory leave carries the hours owed back.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The category of a typed leave entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Unpaid leave (ücretsiz izin).
    Unpaid,
    /// Annual leave (yıllık izin).
    Annual,
    /// Compensatory leave (telafi izni); requires hours.
    Compensatory,
}

impl LeaveType {
    /// Returns true if entries of this type must carry hours.
    pub fn requires_hours(self) -> bool {
        self == LeaveType::Compensatory
    }
}

/// A request to record a typed leave entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveTypeSubmission {
    /// The roster id of the employee.
    pub employee_id: String,
    /// The day of leave.
    pub date: NaiveDate,
    /// The leave category.
    pub leave_type: LeaveType,
    /// Hours, required for compensatory leave.
    #[serde(default)]
    pub hours: Option<f64>,
}

/// A stored typed leave entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveTypeEntry {
    /// Generated unique identifier.
    pub id: String,
    /// The roster id of the employee.
    pub employee_id: String,
    /// The day of leave.
    pub date: NaiveDate,
    /// The leave category.
    pub leave_type: LeaveType,
    /// Hours, present for compensatory leave.
    #[serde(default)]
    pub hours: Option<f64>,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

impl LeaveTypeEntry {
    /// Builds a stored entry from a submission.
    pub fn from_submission(
        submission: LeaveTypeSubmission,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            employee_id: submission.employee_id,
            date: submission.date,
            leave_type: submission.leave_type,
            hours: submission.hours,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Unpaid).unwrap(),
            "\"unpaid\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::Annual).unwrap(),
            "\"annual\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveType::Compensatory).unwrap(),
            "\"compensatory\""
        );
    }

    #[test]
    fn test_only_compensatory_requires_hours() {
        assert!(LeaveType::Compensatory.requires_hours());
        assert!(!LeaveType::Annual.requires_hours());
        assert!(!LeaveType::Unpaid.requires_hours());
    }

    #[test]
    fn test_hours_may_be_omitted() {
        let json = r#"{"employee_id": "ebru", "date": "2025-03-11", "leave_type": "annual"}"#;
        let submission: LeaveTypeSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.leave_type, LeaveType::Annual);
        assert_eq!(submission.hours, None);
    }

    #[test]
    fn test_null_hours_deserialize_as_none() {
        let json = r#"{"employee_id": "ebru", "date": "2025-03-11", "leave_type": "compensatory", "hours": null}"#;
        let submission: LeaveTypeSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.hours, None);
    }

    #[test]
    fn test_compensatory_hours_deserialize() {
        let json = r#"{"employee_id": "ebru", "date": "2025-03-11", "leave_type": "compensatory", "hours": 2.5}"#;
        let submission: LeaveTypeSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.hours, Some(2.5));
    }

    #[test]
    fn test_unknown_leave_type_is_rejected() {
        let json = r#"{"employee_id": "ebru", "date": "2025-03-11", "leave_type": "sick"}"#;
        let result: Result<LeaveTypeSubmission, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

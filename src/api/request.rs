//! Request types for the tracker API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! endpoints, and their conversion into domain submissions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveSubmission, LeaveType, LeaveTypeSubmission, OvertimeSubmission};

/// Body of `POST /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    /// Roster id of the employee.
    pub employee_id: String,
    /// Day of leave (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Week the entry is grouped under (YYYY-MM-DD).
    pub week_start: NaiveDate,
    /// Position within the day's leave roster.
    pub slot: i64,
}

/// Query of `GET /leaves`.
///
/// `week_start` is matched against the stored value as given; an unknown
/// week simply matches nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveListQuery {
    /// Only entries grouped under this week.
    #[serde(default)]
    pub week_start: Option<String>,
}

impl LeaveListQuery {
    /// The week filter, if one was given. An empty value means no filter.
    pub fn week_filter(&self) -> Option<&str> {
        self.week_start.as_deref().filter(|week| !week.is_empty())
    }
}

/// Query of `DELETE /leaves`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveCriteriaQuery {
    /// Roster id of the employee.
    pub employee_id: String,
    /// Day of leave.
    pub date: NaiveDate,
}

/// Body of `POST /overtime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOvertimeRequest {
    /// Roster id of the employee.
    pub employee_id: String,
    /// Day the overtime was worked.
    pub date: NaiveDate,
    /// Hours worked.
    pub hours: f64,
}

/// Body of `POST /leave-types`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveTypeRequest {
    /// Roster id of the employee.
    pub employee_id: String,
    /// Day of leave.
    pub date: NaiveDate,
    /// Leave category.
    pub leave_type: LeaveType,
    /// Hours, required for compensatory leave.
    #[serde(default)]
    pub hours: Option<f64>,
}

impl From<CreateLeaveRequest> for LeaveSubmission {
    fn from(req: CreateLeaveRequest) -> Self {
        LeaveSubmission {
            employee_id: req.employee_id,
            date: req.date,
            week_start: req.week_start,
            slot: req.slot,
        }
    }
}

impl From<CreateOvertimeRequest> for OvertimeSubmission {
    fn from(req: CreateOvertimeRequest) -> Self {
        OvertimeSubmission {
            employee_id: req.employee_id,
            date: req.date,
            hours: req.hours,
        }
    }
}

impl From<CreateLeaveTypeRequest> for LeaveTypeSubmission {
    fn from(req: CreateLeaveTypeRequest) -> Self {
        LeaveTypeSubmission {
            employee_id: req.employee_id,
            date: req.date,
            leave_type: req.leave_type,
            hours: req.hours,
        }
    }
}

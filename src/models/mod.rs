//! Core data models for the leave tracker.
//!
//! This module contains the roster member type and the three stored record
//! kinds, together with the submissions they are built from.

mod employee;
mod leave;
mod leave_type;
mod overtime;

pub use employee::{Employee, Role};
pub use leave::{LeaveEntry, LeaveSubmission};
pub use leave_type::{LeaveType, LeaveTypeEntry, LeaveTypeSubmission};
pub use overtime::{OvertimeEntry, OvertimeSubmission};

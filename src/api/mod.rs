//! HTTP API module for the leave tracker.
//!
//! This module provides the REST endpoints for the roster, leave entries,
//! overtime entries and typed-leave entries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{SERVICE_MESSAGE, create_router};
pub use request::{
    CreateLeaveRequest, CreateLeaveTypeRequest, CreateOvertimeRequest, LeaveCriteriaQuery,
    LeaveListQuery,
};
pub use response::{ApiError, ApiErrorResponse, StatusMessage};
pub use state::AppState;

//! Error types for the leave tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejection and fault the tracker can produce. The `Display`
//! text of each rejection is the reason shown to API clients.

use std::fmt;

use thiserror::Error;

/// The kind of record a lookup or deletion targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A leave entry.
    Leave,
    /// An overtime entry.
    Overtime,
    /// A typed leave entry.
    LeaveType,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Leave => write!(f, "İzin kaydı"),
            RecordKind::Overtime => write!(f, "Fazla çalışma kaydı"),
            RecordKind::LeaveType => write!(f, "İzin türü kaydı"),
        }
    }
}

/// The main error type for the leave tracker.
///
/// # Example
///
/// ```
/// use leave_tracker::error::TrackerError;
///
/// let error = TrackerError::SlotLimitReached { limit: 3 };
/// assert_eq!(
///     error.to_string(),
///     "Bu gün için maksimum izin sayısına (3) ulaşıldı"
/// );
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The employee id does not resolve in the roster.
    #[error("Geçersiz çalışan ID")]
    InvalidEmployee {
        /// The id that failed to resolve.
        employee_id: String,
    },

    /// Leave was requested for the current calendar day.
    #[error("Bugün için izin kullanımı yasaktır")]
    SameDayLeave,

    /// The other member of the exclusive pair is already on leave that day.
    #[error("{employee} ve {partner} aynı gün izinli olamaz")]
    ExclusivePairConflict {
        /// Display name of the submitting employee.
        employee: String,
        /// Display name of the partner already on leave.
        partner: String,
    },

    /// The daily leave cap for the date has been reached.
    #[error("Bu gün için maksimum izin sayısına ({limit}) ulaşıldı")]
    SlotLimitReached {
        /// The cap that applied.
        limit: usize,
    },

    /// The employee already has a leave entry on the date.
    #[error("Bu çalışan bu tarihte zaten izinli")]
    AlreadyOnLeave,

    /// Compensatory leave was submitted without hours.
    #[error("Telafi izni için saat belirtilmeli")]
    MissingHours,

    /// The delete target does not exist.
    #[error("{kind} bulunamadı")]
    NotFound {
        /// What was being looked up.
        kind: RecordKind,
    },

    /// The document store failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration: {message}")]
    ConfigInvalid {
        /// What was wrong.
        message: String,
    },
}

impl TrackerError {
    /// Builds a store error from anything displayable.
    pub fn store(message: impl fmt::Display) -> Self {
        TrackerError::Store {
            message: message.to_string(),
        }
    }

    /// Returns true for rejections the caller caused (4xx territory).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidEmployee { .. }
                | TrackerError::SameDayLeave
                | TrackerError::ExclusivePairConflict { .. }
                | TrackerError::SlotLimitReached { .. }
                | TrackerError::AlreadyOnLeave
                | TrackerError::MissingHours
                | TrackerError::NotFound { .. }
        )
    }
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;

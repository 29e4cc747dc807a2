//! Input validation for timetabling problems.
//!
//! Checks the input contract before any placement runs, so a bad batch
//! never leaves partial assignments behind. Detects:
//! - Duplicate IDs
//! - Zero durations, student counts and capacities
//! - Sessions longer than the daily window
//! - Empty room lists and malformed windows

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{DailyWindow, Room, Session};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A session lasts zero hours.
    ZeroDuration,
    /// A session is longer than the daily window.
    DurationExceedsWindow,
    /// A session has no students.
    ZeroStudents,
    /// A room has no seats.
    ZeroCapacity,
    /// The room list is empty.
    NoRooms,
    /// The daily window is empty or past midnight.
    InvalidWindow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the daily window.
pub fn validate_window(window: &DailyWindow) -> ValidationResult {
    if window.start_hour >= window.end_hour || window.end_hour > 24 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            format!(
                "Daily window {}-{} is not a non-empty range within 0-24",
                window.start_hour, window.end_hour
            ),
        )]);
    }
    Ok(())
}

/// Validates a room list.
///
/// Checks:
/// 1. At least one room
/// 2. No duplicate room IDs
/// 3. Every room has a positive capacity
pub fn validate_rooms(rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    if rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "No rooms supplied",
        ));
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
        if r.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Room '{}' has zero capacity", r.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates one batch of sessions against the daily window.
///
/// Checks:
/// 1. No duplicate session IDs within the batch
/// 2. Every session lasts at least one hour
/// 3. Every session fits inside the window
/// 4. Every session has at least one student
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sessions(sessions: &[Session], window: &DailyWindow) -> ValidationResult {
    let mut errors = Vec::new();
    let mut session_ids = HashSet::new();

    for s in sessions {
        if !session_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate session ID: {}", s.id),
            ));
        }

        if s.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Session '{}' has zero duration", s.id),
            ));
        } else if !window.fits(s.duration) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationExceedsWindow,
                format!(
                    "Session '{}' lasts {}h, longer than the {}h day",
                    s.id,
                    s.duration,
                    window.length()
                ),
            ));
        }

        if s.student_count == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroStudents,
                format!("Session '{}' has no students", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

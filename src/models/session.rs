//! Session (class) model.
//!
//! A session is one class meeting that needs a room, a slot and its
//! instructor for a fixed number of consecutive hours.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// A class session to be placed in the timetable.
///
/// Sessions are immutable inputs; the engine clones them into the
/// assignments it creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    /// Human-readable course name.
    pub name: String,
    /// Instructor teaching the session. Two sessions with the same
    /// instructor may not overlap on the same day.
    pub instructor: String,
    /// Length in whole hours.
    pub duration: u32,
    /// Preferred day and start hour.
    pub preferred_slot: (Weekday, u32),
    /// Required room category (e.g. "Lecture", "Lab").
    pub room_category: String,
    /// Number of enrolled students.
    pub student_count: u32,
}

impl Session {
    /// Creates a one-hour session for one student, preferring Monday 8:00.
    pub fn new(id: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            instructor: instructor.into(),
            duration: 1,
            preferred_slot: (Weekday::Monday, 8),
            room_category: String::new(),
            student_count: 1,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the duration in hours.
    pub fn with_duration(mut self, hours: u32) -> Self {
        self.duration = hours;
        self
    }

    /// Sets the preferred day and start hour.
    pub fn with_preferred_slot(mut self, day: Weekday, hour: u32) -> Self {
        self.preferred_slot = (day, hour);
        self
    }

    /// Sets the required room category.
    pub fn with_room_category(mut self, category: impl Into<String>) -> Self {
        self.room_category = category.into();
        self
    }

    /// Sets the student count.
    pub fn with_students(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    /// Preferred start hour.
    #[inline]
    pub fn preferred_hour(&self) -> u32 {
        self.preferred_slot.1
    }

    /// Load measure used by the adaptive ordering: hours x students.
    #[inline]
    pub fn load(&self) -> u64 {
        u64::from(self.duration) * u64::from(self.student_count)
    }
}

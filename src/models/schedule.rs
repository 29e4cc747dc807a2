//! Timetable (solution) model.
//!
//! A schedule is an ordered list of session-room-slot assignments. It
//! can audit itself against the hard timetabling constraints and report
//! the violations it finds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::calendar::hours_overlap;
use super::{DailyWindow, Room, Session, Weekday};

/// An ordered list of assignments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in creation order.
    pub assignments: Vec<Assignment>,
}

/// A session placed in a room on a day, for `[start_hour, end_hour)`.
///
/// The room never changes after creation; local improvement may move
/// the day and hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The placed session.
    pub session: Session,
    /// The room it occupies.
    pub room: Room,
    /// Teaching day.
    pub day: Weekday,
    /// Start hour (inclusive).
    pub start_hour: u32,
    /// End hour (exclusive), always `start_hour + session.duration`.
    pub end_hour: u32,
}

/// A hard-constraint violation found by [`Schedule::violations`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (room, instructor, or session).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two sessions overlap in the same room.
    RoomOverlap,
    /// An instructor teaches two overlapping sessions.
    InstructorOverlap,
    /// More students than seats.
    CapacityExceeded,
    /// Session lies outside the daily window.
    OutsideWindow,
}

impl Assignment {
    /// Creates an assignment starting at `start_hour`.
    pub fn new(session: Session, room: Room, day: Weekday, start_hour: u32) -> Self {
        let end_hour = start_hour + session.duration;
        Self {
            session,
            room,
            day,
            start_hour,
            end_hour,
        }
    }

    /// Occupied hours.
    #[inline]
    pub fn hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    /// Moves the assignment to another slot, keeping the room.
    pub fn move_to(&mut self, day: Weekday, start_hour: u32) {
        self.day = day;
        self.start_hour = start_hour;
        self.end_hour = start_hour + self.session.duration;
    }

    /// Whether this assignment and `other` share a day and overlapping hours.
    #[inline]
    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.day == other.day
            && hours_overlap(
                self.start_hour,
                self.end_hour,
                other.start_hour,
                other.end_hour,
            )
    }

    /// Absolute distance between the start hour and the preferred hour.
    #[inline]
    pub fn preference_gap(&self) -> u32 {
        self.start_hour.abs_diff(self.session.preferred_hour())
    }
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Removes every assignment.
    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    /// Sum of occupied hours.
    pub fn total_hours(&self) -> u32 {
        self.assignments.iter().map(Assignment::hours).sum()
    }

    /// Finds the assignment for a given session.
    pub fn assignment_for_session(&self, session_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.session.id == session_id)
    }

    /// Returns all assignments in a given room.
    pub fn assignments_for_room(&self, room_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.room.id == room_id)
            .collect()
    }

    /// Returns all assignments taught by a given instructor.
    pub fn assignments_for_instructor(&self, instructor: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.session.instructor == instructor)
            .collect()
    }

    /// Occupied hours per room, for every room in `rooms`.
    ///
    /// Rooms without assignments map to zero.
    pub fn room_hours(&self, rooms: &[Room]) -> HashMap<String, u32> {
        rooms
            .iter()
            .map(|room| {
                let hours = self
                    .assignments_for_room(&room.id)
                    .iter()
                    .map(|a| a.hours())
                    .sum();
                (room.id.clone(), hours)
            })
            .collect()
    }

    /// Audits every hard constraint and returns all violations.
    ///
    /// Overlaps are reported once per offending pair.
    pub fn violations(&self, window: &DailyWindow) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (i, a) in self.assignments.iter().enumerate() {
            if !a.room.seats(a.session.student_count) {
                violations.push(Violation::new(
                    ViolationType::CapacityExceeded,
                    &a.room.id,
                    format!(
                        "Session '{}' has {} students, room '{}' seats {}",
                        a.session.id, a.session.student_count, a.room.id, a.room.capacity
                    ),
                ));
            }

            if !window.contains(a.start_hour, a.hours()) {
                violations.push(Violation::new(
                    ViolationType::OutsideWindow,
                    &a.session.id,
                    format!(
                        "Session '{}' runs {}-{} outside {}-{}",
                        a.session.id, a.start_hour, a.end_hour, window.start_hour, window.end_hour
                    ),
                ));
            }

            for b in &self.assignments[i + 1..] {
                if !a.overlaps(b) {
                    continue;
                }
                if a.room.id == b.room.id {
                    violations.push(Violation::new(
                        ViolationType::RoomOverlap,
                        &a.room.id,
                        format!(
                            "Sessions '{}' and '{}' overlap in room '{}' on {}",
                            a.session.id, b.session.id, a.room.id, a.day
                        ),
                    ));
                }
                if a.session.instructor == b.session.instructor {
                    violations.push(Violation::new(
                        ViolationType::InstructorOverlap,
                        &a.session.instructor,
                        format!(
                            "Instructor '{}' teaches '{}' and '{}' at once on {}",
                            a.session.instructor, a.session.id, b.session.id, a.day
                        ),
                    ));
                }
            }
        }

        violations
    }

    /// Whether the schedule satisfies every hard constraint.
    pub fn is_valid(&self, window: &DailyWindow) -> bool {
        self.violations(window).is_empty()
    }
}

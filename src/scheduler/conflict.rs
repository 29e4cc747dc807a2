//! Room and instructor conflict detection.
//!
//! # Complexity
//! O(a) per candidate slot, where a = existing assignments. Every
//! placement scan calls it once per (day, hour, room) candidate, which
//! makes it the dominant cost of the whole engine.

use crate::models::{hours_overlap, Assignment, Room, Session, Weekday};

/// Whether placing `session` in `room` on `day` at `start_hour` would
/// clash with any of `assignments`.
///
/// A clash is an existing assignment on the same day with an
/// overlapping `[start, end)` interval that either uses the same room or
/// is taught by the same instructor.
pub fn has_conflict<'a, I>(
    session: &Session,
    day: Weekday,
    start_hour: u32,
    room: &Room,
    assignments: I,
) -> bool
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let end_hour = start_hour + session.duration;

    assignments.into_iter().any(|existing| {
        existing.day == day
            && hours_overlap(start_hour, end_hour, existing.start_hour, existing.end_hour)
            && (existing.room.id == room.id || existing.session.instructor == session.instructor)
    })
}

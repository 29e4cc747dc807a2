//! Batch statistics for adaptive rule selection.

use crate::models::Session;

/// Range of durations and student counts over one batch of sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSpread {
    /// max(duration) - min(duration), in hours.
    pub duration: u32,
    /// max(student_count) - min(student_count).
    pub students: u32,
}

impl BatchSpread {
    /// Measures a batch. Returns `None` for an empty batch.
    pub fn measure(sessions: &[Session]) -> Option<Self> {
        let first = sessions.first()?;
        let init = (
            first.duration,
            first.duration,
            first.student_count,
            first.student_count,
        );
        let (min_d, max_d, min_s, max_s) =
            sessions
                .iter()
                .fold(init, |(min_d, max_d, min_s, max_s), s| {
                    (
                        min_d.min(s.duration),
                        max_d.max(s.duration),
                        min_s.min(s.student_count),
                        max_s.max(s.student_count),
                    )
                });

        Some(Self {
            duration: max_d - min_d,
            students: max_s - min_s,
        })
    }
}

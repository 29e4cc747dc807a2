//! Session ordering rules.
//!
//! Every placement strategy first decides in which order to visit the
//! pending sessions. The rules form a closed set; the adaptive policy
//! picks one per batch from the spread of durations and head counts.
//!
//! # Convention
//! Rules order sessions so that the first one is placed first. Sorting
//! is stable: sessions with equal keys keep their input order.
//!
//! ```
//! use u_timetable::models::Session;
//! use u_timetable::ordering::OrderingRule;
//!
//! let sessions = vec![
//!     Session::new("short", "A").with_duration(1).with_students(30),
//!     Session::new("long", "B").with_duration(3).with_students(30),
//! ];
//! let order = OrderingRule::LongestThenLargest.sort_indices(&sessions);
//! assert_eq!(order, vec![1, 0]);
//! ```

mod spread;

pub use spread::BatchSpread;

use std::cmp::Ordering;

use crate::models::Session;

/// Duration spread (hours) above which the adaptive policy sorts by duration.
pub const DURATION_SPREAD_THRESHOLD: u32 = 2;

/// Student spread above which the adaptive policy sorts by head count.
pub const STUDENT_SPREAD_THRESHOLD: u32 = 30;

/// A session ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingRule {
    /// Longest duration first, then most students.
    LongestThenLargest,
    /// Longest duration first, then fewest students.
    LongestThenSmallest,
    /// Most students first, then shortest duration.
    LargestThenShortest,
    /// Largest duration x students first, then shortest duration.
    HeaviestThenShortest,
    /// Longest duration first; nothing else considered.
    Longest,
}

impl OrderingRule {
    /// Rule name.
    pub fn name(&self) -> &'static str {
        match self {
            OrderingRule::LongestThenLargest => "longest-then-largest",
            OrderingRule::LongestThenSmallest => "longest-then-smallest",
            OrderingRule::LargestThenShortest => "largest-then-shortest",
            OrderingRule::HeaviestThenShortest => "heaviest-then-shortest",
            OrderingRule::Longest => "longest",
        }
    }

    /// Picks the rule for a batch.
    ///
    /// Wide duration spread favors long sessions; otherwise wide
    /// head-count spread favors large ones; otherwise total load decides.
    /// An empty batch has no spread and gets [`OrderingRule::HeaviestThenShortest`].
    pub fn adaptive(sessions: &[Session]) -> Self {
        match BatchSpread::measure(sessions) {
            Some(spread) if spread.duration > DURATION_SPREAD_THRESHOLD => {
                OrderingRule::LongestThenSmallest
            }
            Some(spread) if spread.students > STUDENT_SPREAD_THRESHOLD => {
                OrderingRule::LargestThenShortest
            }
            _ => OrderingRule::HeaviestThenShortest,
        }
    }

    /// Compares two sessions; `Less` means `a` is placed before `b`.
    pub fn compare(&self, a: &Session, b: &Session) -> Ordering {
        match self {
            OrderingRule::LongestThenLargest => b
                .duration
                .cmp(&a.duration)
                .then_with(|| b.student_count.cmp(&a.student_count)),
            OrderingRule::LongestThenSmallest => b
                .duration
                .cmp(&a.duration)
                .then_with(|| a.student_count.cmp(&b.student_count)),
            OrderingRule::LargestThenShortest => b
                .student_count
                .cmp(&a.student_count)
                .then_with(|| a.duration.cmp(&b.duration)),
            OrderingRule::HeaviestThenShortest => b
                .load()
                .cmp(&a.load())
                .then_with(|| a.duration.cmp(&b.duration)),
            OrderingRule::Longest => b.duration.cmp(&a.duration),
        }
    }

    /// Returns indices into `sessions` in placement order.
    pub fn sort_indices(&self, sessions: &[Session]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..sessions.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&sessions[a], &sessions[b]));
        indices
    }
}

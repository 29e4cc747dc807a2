//! Divide-and-partition placement.
//!
//! # Algorithm
//!
//! 1. Sort the batch by duration, longest first (top level only).
//! 2. Split the index range at its midpoint, left half before right.
//! 3. Place each singleton range with a first-fit scan (rooms in input
//!    order) against the shared global schedule.
//!
//! Ranges are kept on an explicit work-list rather than the call stack,
//! so the stack holds at most one pending right half per split level.
//!
//! Every leaf checks conflicts against the whole schedule, so splitting
//! changes only bookkeeping, not feasibility: the placements equal a
//! linear first-fit scan in sorted order.

use std::ops::Range;

use tracing::trace;

use super::greedy::{place_first_fit, RoomOrder};
use super::state::ScheduleState;
use crate::models::{DailyWindow, Room, Session};
use crate::ordering::OrderingRule;

struct Frame {
    range: Range<usize>,
    depth: usize,
}

/// Places `sessions` by recursive halving and returns the positions of
/// the assignments created, in creation order.
pub(crate) fn place_by_partition(
    sessions: &[Session],
    rooms: &[Room],
    window: &DailyWindow,
    state: &mut ScheduleState,
) -> Vec<usize> {
    let order: Vec<usize> = if sessions.len() > 1 {
        OrderingRule::Longest.sort_indices(sessions)
    } else {
        (0..sessions.len()).collect()
    };

    let mut created = Vec::new();
    let mut stack = vec![Frame {
        range: 0..order.len(),
        depth: 0,
    }];

    while let Some(Frame { range, depth }) = stack.pop() {
        state.counters.recursive_calls += 1;
        state.counters.max_recursion_depth = state.counters.max_recursion_depth.max(depth);
        trace!(event = "partition_frame", start = range.start, end = range.end, depth);

        match range.len() {
            0 => {}
            1 => {
                let session = &sessions[order[range.start]];
                if let Some(pos) =
                    place_first_fit(session, rooms, RoomOrder::AsGiven, window, state)
                {
                    created.push(pos);
                }
            }
            len => {
                let mid = range.start + len / 2;
                state.counters.partitions_performed += 1;
                // Right half first so the left half pops next.
                stack.push(Frame {
                    range: mid..range.end,
                    depth: depth + 1,
                });
                stack.push(Frame {
                    range: range.start..mid,
                    depth: depth + 1,
                });
            }
        }
    }

    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn session(id: &str, instructor: &str, duration: u32, students: u32) -> Session {
        Session::new(id, instructor)
            .with_duration(duration)
            .with_students(students)
    }

    fn run(sessions: &[Session], rooms: &[Room]) -> (ScheduleState, Vec<usize>) {
        let mut state = ScheduleState::new();
        let created = place_by_partition(sessions, rooms, &DailyWindow::default(), &mut state);
        (state, created)
    }

    #[test]
    fn test_empty_batch() {
        let (state, created) = run(&[], &[Room::new("R1", 10)]);
        assert!(created.is_empty());
        assert_eq!(state.counters().recursive_calls, 1);
        assert_eq!(state.counters().max_recursion_depth, 0);
        assert_eq!(state.counters().partitions_performed, 0);
    }

    #[test]
    fn test_single_session() {
        let (state, created) = run(&[session("S1", "A", 2, 10)], &[Room::new("R1", 10)]);
        assert_eq!(created, vec![0]);
        assert_eq!(state.counters().recursive_calls, 1);
        assert_eq!(state.counters().partitions_performed, 0);
        assert_eq!(state.counters().successful_placements, 1);
    }

    #[test]
    fn test_counters_for_five() {
        // 5 → (2, 3) → (1,1), (1, 2) → (1, 1)
        let sessions: Vec<Session> = (0..5)
            .map(|i| session(&format!("S{i}"), &format!("I{i}"), 1, 10))
            .collect();
        let (state, created) = run(&sessions, &[Room::new("R1", 10)]);

        assert_eq!(created.len(), 5);
        assert_eq!(state.counters().partitions_performed, 4);
        assert_eq!(state.counters().recursive_calls, 9);
        assert_eq!(state.counters().max_recursion_depth, 3);
        assert_eq!(state.counters().iterations, 0);
    }

    #[test]
    fn test_longest_placed_first() {
        let sessions = vec![
            session("a", "A", 1, 10),
            session("b", "B", 3, 10),
            session("c", "C", 2, 10),
        ];
        let (state, _) = run(&sessions, &[Room::new("R1", 10)]);
        let order: Vec<&str> = state
            .assignments()
            .iter()
            .map(|a| a.session.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(state.schedule().assignment_for_session("a").unwrap().start_hour, 13);
    }

    #[test]
    fn test_rooms_in_input_order() {
        let rooms = vec![Room::new("Big", 100), Room::new("Snug", 12)];
        let (state, _) = run(&[session("S1", "A", 1, 10)], &rooms);
        assert_eq!(state.assignments()[0].room.id, "Big");
    }

    #[test]
    fn test_unplaceable_leaf() {
        let sessions = vec![session("fits", "A", 1, 10), session("huge", "B", 1, 500)];
        let (state, created) = run(&sessions, &[Room::new("R1", 50)]);
        assert_eq!(created.len(), 1);
        assert_eq!(state.counters().failed_placements, 1);
        assert_eq!(state.assignments()[0].day, Weekday::Monday);
    }
}

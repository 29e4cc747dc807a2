//! Greedy first-fit placement and local improvement.
//!
//! # Algorithm
//!
//! 1. Order the batch by the policy's [`OrderingRule`].
//! 2. For each session, scan days in calendar order, start hours
//!    ascending, and rooms closest-fit first.
//! 3. Accept the first room that seats the class without a room or
//!    instructor conflict. Never backtrack.
//! 4. (Improved only) Run bounded passes that slide assignments towards
//!    their preferred hour.
//!
//! # Complexity
//! O(n * d * h * r * a) where n=sessions, d=days, h=start hours,
//! r=rooms, a=assignments already placed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conflict::has_conflict;
use super::state::ScheduleState;
use crate::config::{EngineConfig, ImprovementMode};
use crate::models::{Assignment, DailyWindow, Room, Session, Weekday};
use crate::ordering::OrderingRule;

/// Greedy sub-policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreedyPolicy {
    /// Longest-then-largest order, first-fit placement.
    #[default]
    Basic,
    /// Ordering rule chosen from the batch's spread, first-fit placement.
    Adaptive,
    /// Basic placement followed by local improvement.
    Improved,
}

impl GreedyPolicy {
    /// Policy name.
    pub fn name(&self) -> &'static str {
        match self {
            GreedyPolicy::Basic => "basic",
            GreedyPolicy::Adaptive => "adaptive",
            GreedyPolicy::Improved => "improved",
        }
    }
}

/// Order in which rooms are tried at each candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoomOrder {
    /// Smallest |capacity - students| first, ties in input order.
    ClosestFit,
    /// Input order.
    AsGiven,
}

/// Places one session at the first feasible (day, hour, room).
///
/// Updates the success or failure counter and returns the position of
/// the new assignment in `state`.
pub(crate) fn place_first_fit(
    session: &Session,
    rooms: &[Room],
    room_order: RoomOrder,
    window: &DailyWindow,
    state: &mut ScheduleState,
) -> Option<usize> {
    let mut candidates: Vec<&Room> = rooms.iter().collect();
    if room_order == RoomOrder::ClosestFit {
        candidates.sort_by_key(|room| room.fit_gap(session.student_count));
    }

    for day in Weekday::ALL {
        for hour in window.start_hours(session.duration) {
            for &room in &candidates {
                if room.seats(session.student_count)
                    && !has_conflict(session, day, hour, room, state.assignments())
                {
                    let pos = state.push(Assignment::new(session.clone(), room.clone(), day, hour));
                    state.counters.successful_placements += 1;
                    return Some(pos);
                }
            }
        }
    }

    state.counters.failed_placements += 1;
    debug!(
        event = "placement_failed",
        session = %session.id,
        duration = session.duration,
        students = session.student_count,
    );
    None
}

/// Runs one greedy pass over `sessions` and returns the positions of the
/// assignments it created, in creation order.
pub(crate) fn place_greedy(
    sessions: &[Session],
    policy: GreedyPolicy,
    rooms: &[Room],
    config: &EngineConfig,
    state: &mut ScheduleState,
) -> Vec<usize> {
    let rule = match policy {
        GreedyPolicy::Basic | GreedyPolicy::Improved => OrderingRule::LongestThenLargest,
        GreedyPolicy::Adaptive => {
            let rule = OrderingRule::adaptive(sessions);
            state.counters.criteria_switches += 1;
            debug!(event = "criterion_selected", rule = rule.name());
            rule
        }
    };

    let window = config.window();
    let mut created = Vec::new();

    for idx in rule.sort_indices(sessions) {
        state.counters.iterations += 1;
        if let Some(pos) =
            place_first_fit(&sessions[idx], rooms, RoomOrder::ClosestFit, &window, state)
        {
            created.push(pos);
        }
    }

    if policy == GreedyPolicy::Improved {
        improve_locally(&created, config, state);
    }

    created
}

/// Slides the assignments at `positions` towards their preferred hour.
///
/// Each pass moves every assignment at most once, to the first slot in
/// scan order whose start is strictly closer to the preferred hour.
/// Stops after a pass without moves or after the configured pass cap.
pub(crate) fn improve_locally(
    positions: &[usize],
    config: &EngineConfig,
    state: &mut ScheduleState,
) {
    let window = config.window();

    for pass in 0..config.max_improvement_passes {
        let mut changed = false;

        for &pos in positions {
            let Some((day, hour)) =
                closer_slot(pos, &window, config.improvement_mode, state.assignments())
            else {
                continue;
            };

            let assignment = &mut state.schedule.assignments[pos];
            debug!(
                event = "local_improvement",
                pass,
                session = %assignment.session.id,
                from_day = %assignment.day,
                from_hour = assignment.start_hour,
                to_day = %day,
                to_hour = hour,
            );
            assignment.move_to(day, hour);
            state.counters.local_improvements += 1;
            changed = true;
        }

        if !changed {
            break;
        }
    }
}

/// First (day, hour) in scan order strictly closer to the preferred hour
/// than the current start of `assignments[pos]`.
///
/// In validated mode, candidates clashing with any other assignment are
/// skipped.
fn closer_slot(
    pos: usize,
    window: &DailyWindow,
    mode: ImprovementMode,
    assignments: &[Assignment],
) -> Option<(Weekday, u32)> {
    let current = &assignments[pos];
    let preferred = current.session.preferred_hour();
    let gap = current.preference_gap();

    for day in Weekday::ALL {
        for hour in window.start_hours(current.session.duration) {
            let unchanged = day == current.day && hour == current.start_hour;
            if unchanged || hour.abs_diff(preferred) >= gap {
                continue;
            }

            if mode == ImprovementMode::Validated {
                let others = assignments
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != pos)
                    .map(|(_, a)| a);
                if has_conflict(&current.session, day, hour, &current.room, others) {
                    continue;
                }
            }

            return Some((day, hour));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str, instructor: &str, duration: u32, students: u32) -> Session {
        Session::new(id, instructor)
            .with_duration(duration)
            .with_students(students)
    }

    fn run(
        sessions: &[Session],
        rooms: &[Room],
        policy: GreedyPolicy,
        config: &EngineConfig,
    ) -> ScheduleState {
        let mut state = ScheduleState::new();
        place_greedy(sessions, policy, rooms, config, &mut state);
        state
    }

    #[test]
    fn test_first_fit_prefers_closest_room() {
        let rooms = vec![Room::new("Big", 100), Room::new("Snug", 25), Room::new("Tiny", 10)];
        let mut state = ScheduleState::new();
        let pos = place_first_fit(
            &session("S1", "A", 1, 20),
            &rooms,
            RoomOrder::ClosestFit,
            &DailyWindow::default(),
            &mut state,
        )
        .unwrap();

        let a = &state.assignments()[pos];
        assert_eq!(a.room.id, "Snug");
        assert_eq!(a.day, Weekday::Monday);
        assert_eq!(a.start_hour, 8);
    }

    #[test]
    fn test_closest_fit_skips_rooms_too_small() {
        // Tiny is closest (gap 2) but too small
        let rooms = vec![Room::new("Big", 100), Room::new("Tiny", 18)];
        let mut state = ScheduleState::new();
        place_first_fit(
            &session("S1", "A", 1, 20),
            &rooms,
            RoomOrder::ClosestFit,
            &DailyWindow::default(),
            &mut state,
        );
        assert_eq!(state.assignments()[0].room.id, "Big");
    }

    #[test]
    fn test_as_given_room_order() {
        let rooms = vec![Room::new("Big", 100), Room::new("Snug", 25)];
        let mut state = ScheduleState::new();
        place_first_fit(
            &session("S1", "A", 1, 20),
            &rooms,
            RoomOrder::AsGiven,
            &DailyWindow::default(),
            &mut state,
        );
        assert_eq!(state.assignments()[0].room.id, "Big");
    }

    #[test]
    fn test_failure_counted() {
        let rooms = vec![Room::new("R1", 10)];
        let mut state = ScheduleState::new();
        let pos = place_first_fit(
            &session("S1", "A", 1, 20),
            &rooms,
            RoomOrder::ClosestFit,
            &DailyWindow::default(),
            &mut state,
        );
        assert!(pos.is_none());
        assert_eq!(state.counters().failed_placements, 1);
        assert_eq!(state.counters().successful_placements, 0);
    }

    #[test]
    fn test_basic_orders_longest_first() {
        let rooms = vec![Room::new("R1", 50)];
        let sessions = vec![session("short", "A", 1, 30), session("long", "B", 3, 30)];
        let state = run(&sessions, &rooms, GreedyPolicy::Basic, &EngineConfig::default());

        let long = state.schedule().assignment_for_session("long").unwrap();
        let short = state.schedule().assignment_for_session("short").unwrap();
        assert_eq!(long.start_hour, 8);
        assert_eq!(short.start_hour, 11);
        assert_eq!(state.counters().iterations, 2);
        assert_eq!(state.counters().successful_placements, 2);
    }

    #[test]
    fn test_fills_day_then_moves_to_next() {
        // Ten one-hour slots per day in a single room
        let rooms = vec![Room::new("R1", 50)];
        let sessions: Vec<Session> = (0..11)
            .map(|i| session(&format!("S{i}"), &format!("I{i}"), 1, 30))
            .collect();
        let state = run(&sessions, &rooms, GreedyPolicy::Basic, &EngineConfig::default());

        let last = state.schedule().assignment_for_session("S10").unwrap();
        assert_eq!(last.day, Weekday::Tuesday);
        assert_eq!(last.start_hour, 8);
    }

    #[test]
    fn test_adaptive_counts_one_switch() {
        let rooms = vec![Room::new("R1", 50)];
        let sessions = vec![session("a", "A", 1, 20), session("b", "B", 4, 25)];
        let state = run(&sessions, &rooms, GreedyPolicy::Adaptive, &EngineConfig::default());
        assert_eq!(state.counters().criteria_switches, 1);
        assert_eq!(state.counters().iterations, 2);

        let basic = run(&sessions, &rooms, GreedyPolicy::Basic, &EngineConfig::default());
        assert_eq!(basic.counters().criteria_switches, 0);
    }

    #[test]
    fn test_adaptive_student_rule_places_largest_first() {
        let rooms = vec![Room::new("R1", 80)];
        // Duration spread 0, student spread 50 → largest first
        let sessions = vec![session("small", "A", 2, 20), session("large", "B", 2, 70)];
        let state = run(&sessions, &rooms, GreedyPolicy::Adaptive, &EngineConfig::default());
        assert_eq!(state.schedule().assignment_for_session("large").unwrap().start_hour, 8);
        assert_eq!(state.schedule().assignment_for_session("small").unwrap().start_hour, 10);
    }

    #[test]
    fn test_improvement_moves_towards_preference() {
        let rooms = vec![Room::new("R1", 50)];
        let sessions = vec![session("S1", "A", 1, 30).with_preferred_slot(Weekday::Monday, 11)];
        let state = run(&sessions, &rooms, GreedyPolicy::Improved, &EngineConfig::default());

        // One hour closer per pass: 8 → 9 → 10 → 11
        let a = &state.assignments()[0];
        assert_eq!(a.day, Weekday::Monday);
        assert_eq!(a.start_hour, 11);
        assert_eq!(a.end_hour, 12);
        assert_eq!(state.counters().local_improvements, 3);
    }

    #[test]
    fn test_improvement_respects_pass_cap() {
        let rooms = vec![Room::new("R1", 50)];
        let sessions = vec![session("S1", "A", 1, 30).with_preferred_slot(Weekday::Monday, 15)];
        let config = EngineConfig::default().with_max_improvement_passes(2);
        let state = run(&sessions, &rooms, GreedyPolicy::Improved, &config);

        assert_eq!(state.assignments()[0].start_hour, 10);
        assert_eq!(state.counters().local_improvements, 2);
    }

    #[test]
    fn test_unchecked_improvement_can_overlap() {
        let rooms = vec![Room::new("R1", 30)];
        let sessions = vec![
            session("S1", "X", 1, 30).with_preferred_slot(Weekday::Monday, 9),
            session("S2", "X", 1, 30).with_preferred_slot(Weekday::Monday, 9),
        ];
        let state = run(&sessions, &rooms, GreedyPolicy::Improved, &EngineConfig::default());

        let s1 = state.schedule().assignment_for_session("S1").unwrap();
        let s2 = state.schedule().assignment_for_session("S2").unwrap();
        assert_eq!((s1.day, s1.start_hour), (Weekday::Monday, 9));
        assert_eq!((s2.day, s2.start_hour), (Weekday::Monday, 9));
        assert_eq!(state.counters().local_improvements, 1);
    }

    #[test]
    fn test_validated_improvement_skips_conflicting_slot() {
        let rooms = vec![Room::new("R1", 30)];
        let sessions = vec![
            session("S1", "X", 1, 30).with_preferred_slot(Weekday::Monday, 9),
            session("S2", "X", 1, 30).with_preferred_slot(Weekday::Monday, 9),
        ];
        let config = EngineConfig::default().with_improvement_mode(ImprovementMode::Validated);
        let state = run(&sessions, &rooms, GreedyPolicy::Improved, &config);

        // Monday 9 is taken by S2, so S1 moves to the next closer slot
        let s1 = state.schedule().assignment_for_session("S1").unwrap();
        assert_eq!((s1.day, s1.start_hour), (Weekday::Tuesday, 9));
        assert_eq!(state.counters().local_improvements, 1);
        assert!(state.schedule().is_valid(&config.window()));
    }

    #[test]
    fn test_improvement_only_touches_new_assignments() {
        let rooms = vec![Room::new("R1", 30)];
        let config = EngineConfig::default();
        let mut state = ScheduleState::new();

        let earlier = vec![session("S1", "A", 1, 30).with_preferred_slot(Weekday::Monday, 12)];
        place_greedy(&earlier, GreedyPolicy::Basic, &rooms, &config, &mut state);

        let later = vec![session("S2", "B", 1, 30).with_preferred_slot(Weekday::Monday, 9)];
        let created = place_greedy(&later, GreedyPolicy::Improved, &rooms, &config, &mut state);

        assert_eq!(created, vec![1]);
        assert_eq!(state.assignments()[0].start_hour, 8);
        assert_eq!(state.assignments()[1].start_hour, 9);
    }
}

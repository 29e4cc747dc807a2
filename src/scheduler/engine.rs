//! The timetabling engine.
//!
//! Owns the rooms, the configuration and the one schedule every strategy
//! writes into. Greedy and partition runs on the same engine see each
//! other's assignments as conflicts; call [`Timetabler::reset_schedule`]
//! between independent runs.

use tracing::info;

use super::greedy::{place_greedy, GreedyPolicy};
use super::partition::place_by_partition;
use super::state::ScheduleState;
use super::statistics::ScheduleStatistics;
use crate::config::EngineConfig;
use crate::error::{Result, TimetableError};
use crate::models::{Assignment, Room, Schedule, Session};
use crate::validation::{validate_rooms, validate_sessions, validate_window};

/// Session-to-room timetabling engine.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Room, Session, Weekday};
/// use u_timetable::scheduler::{GreedyPolicy, Timetabler};
///
/// let rooms = vec![Room::new("R1", 20)];
/// let sessions = vec![Session::new("S1", "X").with_students(20)];
///
/// let mut engine = Timetabler::new(rooms).unwrap();
/// let placed = engine.place(&sessions, GreedyPolicy::Basic).unwrap();
///
/// assert_eq!(placed.len(), 1);
/// assert_eq!(placed[0].day, Weekday::Monday);
/// assert_eq!(placed[0].start_hour, 8);
/// ```
#[derive(Debug, Clone)]
pub struct Timetabler {
    rooms: Vec<Room>,
    config: EngineConfig,
    state: ScheduleState,
}

impl Timetabler {
    /// Creates an engine with the default configuration.
    ///
    /// # Errors
    /// `InvalidInput` if the room list is empty, has duplicate ids, or a
    /// room has zero capacity.
    pub fn new(rooms: Vec<Room>) -> Result<Self> {
        Self::with_config(rooms, EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// # Errors
    /// `InvalidInput` for a bad room list or a malformed daily window.
    pub fn with_config(rooms: Vec<Room>, config: EngineConfig) -> Result<Self> {
        let mut errors = Vec::new();
        if let Err(e) = validate_window(&config.window()) {
            errors.extend(e);
        }
        if let Err(e) = validate_rooms(&rooms) {
            errors.extend(e);
        }
        if !errors.is_empty() {
            return Err(TimetableError::InvalidInput(errors));
        }

        Ok(Self {
            rooms,
            config,
            state: ScheduleState::new(),
        })
    }

    /// Rooms available to every run.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assignments and counters accumulated since the last reset.
    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// All assignments accumulated since the last reset.
    pub fn schedule(&self) -> &Schedule {
        self.state.schedule()
    }

    /// Places a batch with a greedy policy.
    ///
    /// Returns the assignments created by this call, in creation order.
    /// For [`GreedyPolicy::Improved`] they carry their slots after local
    /// improvement. Sessions that fit nowhere are left out and counted
    /// as failures.
    ///
    /// # Errors
    /// `InvalidInput` if the batch breaks the input contract; nothing is
    /// placed in that case.
    pub fn place(&mut self, sessions: &[Session], policy: GreedyPolicy) -> Result<Vec<Assignment>> {
        validate_sessions(sessions, &self.config.window())?;

        info!(
            event = "run_start",
            strategy = policy.name(),
            sessions = sessions.len(),
            rooms = self.rooms.len(),
        );

        let before = self.state.counters;
        let created = place_greedy(sessions, policy, &self.rooms, &self.config, &mut self.state);
        let placed = self.collect(&created);

        info!(
            event = "run_end",
            strategy = policy.name(),
            assigned = placed.len(),
            failed = self.state.counters.failed_placements - before.failed_placements,
            local_improvements =
                self.state.counters.local_improvements - before.local_improvements,
        );

        Ok(placed)
    }

    /// Places a batch by recursive halving.
    ///
    /// Returns the assignments created by this call, in creation order.
    ///
    /// # Errors
    /// `InvalidInput` if the batch breaks the input contract; nothing is
    /// placed in that case.
    pub fn place_by_partition(&mut self, sessions: &[Session]) -> Result<Vec<Assignment>> {
        let window = self.config.window();
        validate_sessions(sessions, &window)?;

        info!(
            event = "run_start",
            strategy = "partition",
            sessions = sessions.len(),
            rooms = self.rooms.len(),
        );

        let before = self.state.counters;
        let created = place_by_partition(sessions, &self.rooms, &window, &mut self.state);
        let placed = self.collect(&created);

        info!(
            event = "run_end",
            strategy = "partition",
            assigned = placed.len(),
            failed = self.state.counters.failed_placements - before.failed_placements,
            max_depth = self.state.counters.max_recursion_depth,
        );

        Ok(placed)
    }

    /// Clears every assignment and zeroes every counter.
    pub fn reset_schedule(&mut self) {
        self.state.reset();
    }

    /// Summary of the current schedule.
    pub fn statistics(&self) -> ScheduleStatistics {
        ScheduleStatistics::calculate(self.state.schedule(), &self.rooms, self.state.counters())
    }

    fn collect(&self, positions: &[usize]) -> Vec<Assignment> {
        positions
            .iter()
            .map(|&pos| self.state.assignments()[pos].clone())
            .collect()
    }
}

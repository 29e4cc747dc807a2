//! Mutable engine state: the assignment set and run counters.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, Schedule};

/// Counters accumulated by every run since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCounters {
    /// Sessions processed by greedy placement.
    pub iterations: u64,
    /// Sessions that received an assignment.
    pub successful_placements: u64,
    /// Sessions that exhausted every candidate slot.
    pub failed_placements: u64,
    /// Adaptive calls that selected an ordering rule.
    pub criteria_switches: u64,
    /// Assignments moved by local improvement.
    pub local_improvements: u64,
    /// Ranges visited by partition placement.
    pub recursive_calls: u64,
    /// Deepest split level reached by partition placement.
    pub max_recursion_depth: usize,
    /// Ranges split in two by partition placement.
    pub partitions_performed: u64,
}

/// The assignment set shared by every strategy of one engine, plus its
/// counters.
///
/// Assignments are only appended, moved in place by local improvement,
/// or cleared all at once by [`ScheduleState::reset`].
#[derive(Debug, Clone, Default)]
pub struct ScheduleState {
    pub(crate) schedule: Schedule,
    pub(crate) counters: EngineCounters,
}

impl ScheduleState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current assignments in creation order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.schedule.assignments
    }

    /// Current assignments as a schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Counters since the last reset.
    pub fn counters(&self) -> &EngineCounters {
        &self.counters
    }

    /// Appends an assignment and returns its position.
    pub(crate) fn push(&mut self, assignment: Assignment) -> usize {
        self.schedule.add_assignment(assignment);
        self.schedule.assignments.len() - 1
    }

    /// Clears every assignment and zeroes every counter.
    pub fn reset(&mut self) {
        self.schedule.clear();
        self.counters = EngineCounters::default();
    }
}

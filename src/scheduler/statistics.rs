//! Timetable statistics.
//!
//! Summarizes the engine's current schedule for reporting callers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned count | Number of assignments |
//! | Total hours | Sum of assigned hours |
//! | Room utilization | Assigned hours per room |
//! | Placement rate | Successful / attempted placements |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::state::EngineCounters;
use crate::models::{Room, Schedule};

/// Snapshot of a schedule and the counters that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStatistics {
    /// Number of assignments.
    pub assigned_count: usize,
    /// Sum of assigned hours.
    pub total_assigned_hours: u32,
    /// Assigned hours per room id. Empty when nothing is assigned;
    /// otherwise lists every room, idle ones with zero.
    pub utilization_by_room: HashMap<String, u32>,
    /// Engine counters since the last reset.
    pub counters: EngineCounters,
}

impl ScheduleStatistics {
    /// Computes statistics for a schedule over the engine's rooms.
    pub fn calculate(schedule: &Schedule, rooms: &[Room], counters: &EngineCounters) -> Self {
        if schedule.is_empty() {
            return Self {
                counters: *counters,
                ..Self::default()
            };
        }

        Self {
            assigned_count: schedule.assignment_count(),
            total_assigned_hours: schedule.total_hours(),
            utilization_by_room: schedule.room_hours(rooms),
            counters: *counters,
        }
    }

    /// Fraction of attempted placements that succeeded (0.0..1.0).
    ///
    /// Returns 1.0 when nothing was attempted.
    pub fn placement_rate(&self) -> f64 {
        let attempted = self.counters.successful_placements + self.counters.failed_placements;
        if attempted == 0 {
            1.0
        } else {
            self.counters.successful_placements as f64 / attempted as f64
        }
    }

    /// Room with the most assigned hours. Ties go to the smallest id.
    pub fn busiest_room(&self) -> Option<(&str, u32)> {
        self.utilization_by_room
            .iter()
            .map(|(id, &hours)| (id.as_str(), hours))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }
}

//! Placement engine.
//!
//! Provides the conflict checker, the greedy and partition placement
//! strategies, the shared schedule state and its statistics.
//!
//! # Algorithm
//!
//! Every strategy is a first-fit scan over (day, hour, room) candidates:
//! fast and deterministic, with no optimality or feasibility guarantee.
//! Strategies differ in the order they visit sessions and rooms, and in
//! the optional local-improvement post-pass.
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod conflict;
mod engine;
mod greedy;
mod partition;
mod state;
mod statistics;

pub use conflict::has_conflict;
pub use engine::Timetabler;
pub use greedy::GreedyPolicy;
pub use state::{EngineCounters, ScheduleState};
pub use statistics::ScheduleStatistics;

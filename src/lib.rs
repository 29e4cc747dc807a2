//! Class timetabling engine.
//!
//! Places class sessions into (day, hour, room) slots so that no room and
//! no instructor is double-booked and every class fits its room. The
//! placement strategies are fast heuristics, not exact solvers: a session
//! that fits nowhere under the chosen scan order is simply left out.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `Room`, `Assignment`,
//!   `Schedule`, `Weekday`, `DailyWindow`
//! - **`ordering`**: Session ordering rules and adaptive rule selection
//! - **`scheduler`**: Conflict checker, greedy and partition placement,
//!   the `Timetabler` engine and its statistics
//! - **`validation`**: Input contract checks (zero durations, capacities,
//!   duplicate IDs, empty room lists)
//! - **`config`**: Engine settings (daily window, improvement passes)
//! - **`generator`**: Seeded synthetic instances
//!
//! # Logging
//!
//! The engine emits `tracing` events (`run_start`, `run_end`,
//! `placement_failed`, `local_improvement`, ...) and never installs a
//! subscriber itself.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};

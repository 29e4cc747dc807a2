//! Engine configuration.
//!
//! All settings have defaults matching the classic weekly timetable:
//! an 8:00-18:00 day and at most ten local-improvement passes.
//!
//! ```
//! use u_timetable::config::{EngineConfig, ImprovementMode};
//!
//! let config = EngineConfig::default()
//!     .with_day_window(9, 17)
//!     .with_max_improvement_passes(5)
//!     .with_improvement_mode(ImprovementMode::Validated);
//!
//! assert_eq!(config.window().length(), 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::DailyWindow;

/// How the local-improvement pass treats conflicts when moving an
/// assignment towards its preferred hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementMode {
    /// Moves are committed without re-checking room or instructor
    /// conflicts. Reproduces the classic behavior; may produce overlaps.
    #[default]
    Unchecked,
    /// Every candidate move is checked against the other assignments;
    /// conflicting candidates are skipped.
    Validated,
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// First bookable hour of each day.
    pub day_start_hour: u32,
    /// Closing hour of each day (exclusive).
    pub day_end_hour: u32,
    /// Cap on full local-improvement passes.
    pub max_improvement_passes: usize,
    /// Conflict handling during local improvement.
    pub improvement_mode: ImprovementMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let window = DailyWindow::default();
        Self {
            day_start_hour: window.start_hour,
            day_end_hour: window.end_hour,
            max_improvement_passes: 10,
            improvement_mode: ImprovementMode::Unchecked,
        }
    }
}

impl EngineConfig {
    /// Sets the daily window.
    pub fn with_day_window(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.day_start_hour = start_hour;
        self.day_end_hour = end_hour;
        self
    }

    /// Sets the local-improvement pass cap.
    pub fn with_max_improvement_passes(mut self, passes: usize) -> Self {
        self.max_improvement_passes = passes;
        self
    }

    /// Sets the local-improvement conflict handling.
    pub fn with_improvement_mode(mut self, mode: ImprovementMode) -> Self {
        self.improvement_mode = mode;
        self
    }

    /// The configured daily window.
    pub fn window(&self) -> DailyWindow {
        DailyWindow::new(self.day_start_hour, self.day_end_hour)
    }
}

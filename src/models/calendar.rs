//! Weekday and daily window models.
//!
//! Timetables cover one teaching week: five weekdays, each with the
//! same daily window of whole hours.
//!
//! # Time Model
//! Hours are whole numbers on a 24-hour clock. A slot occupies the
//! half-open interval `[start, end)`, so a session ending at 10 and one
//! starting at 10 do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day.
///
/// Declaration order is calendar order, which is also the order every
/// placement scan visits days in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Zero-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The bookable hours of a day, `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWindow {
    /// First bookable hour (inclusive).
    pub start_hour: u32,
    /// Closing hour (exclusive). No session may end after it.
    pub end_hour: u32,
}

impl DailyWindow {
    /// Creates a new window.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Number of bookable hours.
    #[inline]
    pub fn length(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Whether a session of `duration` hours fits in the window at all.
    #[inline]
    pub fn fits(&self, duration: u32) -> bool {
        duration <= self.length()
    }

    /// Candidate start hours for a session of `duration` hours, ascending.
    ///
    /// Empty when the session is longer than the window.
    pub fn start_hours(&self, duration: u32) -> std::ops::RangeInclusive<u32> {
        if self.fits(duration) {
            self.start_hour..=(self.end_hour - duration)
        } else {
            // An empty inclusive range.
            1..=0
        }
    }

    /// Whether `[start, start + duration)` lies inside the window.
    pub fn contains(&self, start: u32, duration: u32) -> bool {
        start >= self.start_hour && start + duration <= self.end_hour
    }
}

impl Default for DailyWindow {
    fn default() -> Self {
        Self::new(8, 18)
    }
}

/// Whether two half-open hour intervals overlap.
#[inline]
pub fn hours_overlap(start_a: u32, end_a: u32, start_b: u32, end_b: u32) -> bool {
    !(end_a <= start_b || start_a >= end_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_order() {
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[4], Weekday::Friday);
        assert!(Weekday::Monday < Weekday::Friday);
        assert_eq!(Weekday::Wednesday.index(), 2);
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }

    #[test]
    fn test_window_start_hours() {
        let w = DailyWindow::default();
        let hours: Vec<u32> = w.start_hours(2).collect();
        assert_eq!(hours.first(), Some(&8));
        assert_eq!(hours.last(), Some(&16));
        assert_eq!(hours.len(), 9);

        let full: Vec<u32> = w.start_hours(10).collect();
        assert_eq!(full, vec![8]);

        assert_eq!(w.start_hours(11).count(), 0);
    }

    #[test]
    fn test_window_contains() {
        let w = DailyWindow::default();
        assert!(w.contains(8, 10));
        assert!(w.contains(15, 3));
        assert!(!w.contains(16, 3));
        assert!(!w.contains(7, 1));
    }

    #[test]
    fn test_hours_overlap() {
        assert!(hours_overlap(8, 10, 9, 11));
        assert!(hours_overlap(8, 12, 9, 10));
        assert!(!hours_overlap(8, 10, 10, 12)); // touching
        assert!(!hours_overlap(12, 14, 8, 12));
    }
}

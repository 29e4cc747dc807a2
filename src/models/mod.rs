//! Timetabling domain models.
//!
//! Provides the data types for describing a weekly timetabling problem
//! and its solution.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training center |
//! |-------------|------------|--------|-----------------|
//! | Session | Lecture | Lesson | Course block |
//! | Room | Lecture hall | Classroom | Training room |
//! | Assignment | Timetable entry | Period | Booking |
//! | Schedule | Semester timetable | Weekly plan | Room plan |

mod calendar;
mod room;
mod schedule;
mod session;

pub use calendar::{hours_overlap, DailyWindow, Weekday};
pub use room::Room;
pub use schedule::{Assignment, Schedule, Violation, ViolationType};
pub use session::Session;

//! Room model.
//!
//! Rooms are the only spatial resource: each has a seat capacity and a
//! set of equipment tags.

use serde::{Deserialize, Serialize};

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Number of seats.
    pub capacity: u32,
    /// Equipment available in the room (e.g. "Projector").
    pub equipment: Vec<String>,
}

impl Room {
    /// Creates a room with no equipment.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
            equipment: Vec::new(),
        }
    }

    /// Adds an equipment tag.
    pub fn with_equipment(mut self, tag: impl Into<String>) -> Self {
        self.equipment.push(tag.into());
        self
    }

    /// Whether the room has a given equipment tag.
    pub fn has_equipment(&self, tag: &str) -> bool {
        self.equipment.iter().any(|e| e == tag)
    }

    /// Whether `students` fit in the room.
    #[inline]
    pub fn seats(&self, students: u32) -> bool {
        self.capacity >= students
    }

    /// Distance between capacity and head count, used for closest-fit
    /// room ordering.
    #[inline]
    pub fn fit_gap(&self, students: u32) -> u32 {
        self.capacity.abs_diff(students)
    }
}

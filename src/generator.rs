//! Synthetic timetabling instances.
//!
//! Produces random rooms and sessions with realistic shapes: one- to
//! four-hour classes, 15-80 students, a shared instructor roster.
//! A fixed seed makes an instance reproducible.

use rand::prelude::*;

use crate::models::{Room, Session, Weekday};

const COURSES: [&str; 16] = [
    "Calculus I",
    "Calculus II",
    "Linear Algebra",
    "Statistics",
    "Physics I",
    "Chemistry I",
    "Programming I",
    "Algorithms",
    "Data Structures",
    "Databases",
    "Networks",
    "Operating Systems",
    "Compilers",
    "Machine Learning",
    "Cryptography",
    "Software Engineering",
];

const INSTRUCTORS: [&str; 12] = [
    "Dr. Adams",
    "Dr. Baker",
    "Dr. Chen",
    "Dr. Diaz",
    "Dr. Evans",
    "Dr. Fischer",
    "Dr. Garcia",
    "Dr. Haddad",
    "Dr. Ito",
    "Dr. Jensen",
    "Dr. Kowalski",
    "Dr. Lopez",
];

const CATEGORIES: [&str; 3] = ["Lecture", "Lab", "Computing"];

const EQUIPMENT: [&str; 4] = ["Projector", "Whiteboard", "Computers", "Lab bench"];

/// Duration in hours and its relative weight.
const DURATION_WEIGHTS: [(u32, u32); 4] = [(1, 20), (2, 40), (3, 30), (4, 10)];

/// Configuration for instance generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of sessions.
    pub sessions: usize,
    /// Number of rooms.
    pub rooms: usize,
    /// Random seed for reproducibility (None for random).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sessions: 50,
            rooms: 8,
            seed: None,
        }
    }
}

/// A generated problem instance.
#[derive(Debug, Clone)]
pub struct Instance {
    pub sessions: Vec<Session>,
    pub rooms: Vec<Room>,
}

/// Random instance generator.
pub struct InstanceGenerator {
    config: GeneratorConfig,
}

impl InstanceGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate one instance.
    pub fn generate(&self) -> Instance {
        let mut rng: Box<dyn RngCore> = match self.config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };

        let rooms = (1..=self.config.rooms)
            .map(|i| generate_room(i, &mut rng))
            .collect();
        let sessions = (1..=self.config.sessions)
            .map(|i| generate_session(i, &mut rng))
            .collect();

        Instance { sessions, rooms }
    }
}

fn generate_room<R: Rng>(index: usize, rng: &mut R) -> Room {
    let mut room = Room::new(format!("R{index}"), rng.random_range(20..=100));
    let tags = rng.random_range(1..=3);
    for tag in EQUIPMENT.choose_multiple(rng, tags) {
        room = room.with_equipment(*tag);
    }
    room
}

fn generate_session<R: Rng>(index: usize, rng: &mut R) -> Session {
    let day = Weekday::ALL[rng.random_range(0..Weekday::ALL.len())];
    let course = COURSES[rng.random_range(0..COURSES.len())];
    let instructor = INSTRUCTORS[rng.random_range(0..INSTRUCTORS.len())];
    let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];

    Session::new(format!("S{index}"), instructor)
        .with_name(course)
        .with_duration(weighted_duration(rng))
        .with_preferred_slot(day, rng.random_range(8..=15))
        .with_room_category(category)
        .with_students(rng.random_range(15..=80))
}

/// Roulette-wheel pick over [`DURATION_WEIGHTS`].
fn weighted_duration<R: Rng>(rng: &mut R) -> u32 {
    let total: u32 = DURATION_WEIGHTS.iter().map(|&(_, w)| w).sum();
    let mut roll = rng.random_range(0..total);
    for &(hours, weight) in &DURATION_WEIGHTS {
        if roll < weight {
            return hours;
        }
        roll -= weight;
    }
    DURATION_WEIGHTS[DURATION_WEIGHTS.len() - 1].0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyWindow;
    use crate::validation::{validate_rooms, validate_sessions};

    fn seeded(sessions: usize, rooms: usize, seed: u64) -> Instance {
        InstanceGenerator::new(GeneratorConfig {
            sessions,
            rooms,
            seed: Some(seed),
        })
        .generate()
    }

    #[test]
    fn test_sizes() {
        let inst = seeded(40, 6, 1);
        assert_eq!(inst.sessions.len(), 40);
        assert_eq!(inst.rooms.len(), 6);
    }

    #[test]
    fn test_generated_instance_is_valid() {
        let inst = seeded(200, 10, 7);
        assert!(validate_rooms(&inst.rooms).is_ok());
        assert!(validate_sessions(&inst.sessions, &DailyWindow::default()).is_ok());

        for r in &inst.rooms {
            assert!((20..=100).contains(&r.capacity));
            assert!((1..=3).contains(&r.equipment.len()));
        }
        for s in &inst.sessions {
            assert!((1..=4).contains(&s.duration));
            assert!((15..=80).contains(&s.student_count));
            assert!((8..=15).contains(&s.preferred_hour()));
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let a = seeded(30, 5, 42);
        let b = seeded(30, 5, 42);
        assert_eq!(a.sessions, b.sessions);
        assert_eq!(a.rooms, b.rooms);
    }

    #[test]
    fn test_unseeded_generates() {
        let inst = InstanceGenerator::new(GeneratorConfig::default()).generate();
        assert_eq!(inst.sessions.len(), 50);
        assert_eq!(inst.rooms.len(), 8);
    }
}

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use crate::models::Activity;

/// Handle shared between the request handlers. One lock over the whole
/// directory; entries are never added or removed after seeding, only their
/// participant rosters change.
pub type SharedDirectory = Arc<RwLock<ActivityDirectory>>;

/// The in-memory club directory, keyed by activity name. Seeded once at
/// startup and discarded on shutdown.
pub struct ActivityDirectory {
    activities: IndexMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn seeded() -> Self {
        let mut activities = IndexMap::new();
        for (name, description, schedule, max_participants, participants) in SEED {
            activities.insert(
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            );
        }
        Self { activities }
    }

    pub fn into_shared(self) -> SharedDirectory {
        Arc::new(RwLock::new(self))
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    pub fn all(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }
}

type SeedRow = (&'static str, &'static str, &'static str, u32, &'static [&'static str]);

const SEED: &[SeedRow] = &[
    (
        "Basketball",
        "Play basketball and develop team skills",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["james@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis techniques and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        10,
        &["sarah@mergington.edu"],
    ),
    (
        "Drama Club",
        "Perform in theatrical productions and develop acting skills",
        "Wednesdays, 3:30 PM - 5:00 PM",
        25,
        &["alex@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Studio",
        "Create paintings, sculptures, and explore various artistic mediums",
        "Thursdays, 3:30 PM - 5:00 PM",
        18,
        &["lucas@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop argumentation and public speaking skills through competitive debate",
        "Mondays and Fridays, 3:30 PM - 4:30 PM",
        14,
        &["rachel@mergington.edu", "david@mergington.edu"],
    ),
    (
        "Science Club",
        "Conduct experiments and explore STEM concepts",
        "Tuesdays, 3:30 PM - 5:00 PM",
        20,
        &["nina@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

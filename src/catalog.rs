// ABOUTME: Embedded catalog of popular home-friendly exercises grouped by body part
// ABOUTME: Seed data for curating the user's exercise bank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! Built-in home workout catalog.
//!
//! The catalog ships with the client so a fresh user can browse and pick
//! exercises without any backend round trip. Entries carry display-oriented
//! sets/reps strings ("3-4", "AMRAP") that the routine generator and the
//! guided session resolve with [`crate::models::target_set_count`].

use crate::models::ExerciseBankEntry;

/// One catalog exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Exercise name, unique across the catalog
    pub name: &'static str,
    /// Suggested sets, numeric or range
    pub sets: &'static str,
    /// Suggested reps, numeric or free text
    pub reps: &'static str,
    /// Short description
    pub info: &'static str,
}

impl From<&CatalogEntry> for ExerciseBankEntry {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.to_owned(),
            sets: entry.sets.to_owned(),
            reps: entry.reps.to_owned(),
            info: entry.info.to_owned(),
        }
    }
}

/// A catalog group by body part or training focus
#[derive(Debug, Clone, Copy)]
pub struct CatalogGroup {
    /// Group title
    pub title: &'static str,
    /// Exercises in this group
    pub entries: &'static [CatalogEntry],
}

const WARM_UP: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Jumping Jacks",
        sets: "3",
        reps: "30 seconds",
        info: "Full body warm-up, increases heart rate.",
    },
    CatalogEntry {
        name: "Arm Circles (Forward/Backward)",
        sets: "2",
        reps: "10-15 each direction",
        info: "Shoulder mobility.",
    },
    CatalogEntry {
        name: "Leg Swings (Forward/Side)",
        sets: "2",
        reps: "10-15 each leg",
        info: "Hip mobility.",
    },
    CatalogEntry {
        name: "Torso Twists",
        sets: "2",
        reps: "10-15 each side",
        info: "Spinal mobility.",
    },
    CatalogEntry {
        name: "Light Cardio (e.g., Marching in Place)",
        sets: "1",
        reps: "2-3 minutes",
        info: "Prepares cardiovascular system.",
    },
];

const UPPER_BODY: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Push-ups (Knees/Standard/Incline)",
        sets: "3-4",
        reps: "AMRAP (As Many Reps As Possible)",
        info: "Chest, shoulders, triceps. Adjust difficulty with incline.",
    },
    CatalogEntry {
        name: "Dumbbell Floor Press",
        sets: "3",
        reps: "8-12",
        info: "Chest and triceps, good for home use with dumbbells.",
    },
    CatalogEntry {
        name: "Dumbbell Rows (Single Arm)",
        sets: "3",
        reps: "8-12 per arm",
        info: "Back (lats) and biceps.",
    },
    CatalogEntry {
        name: "Dumbbell Overhead Press (Seated)",
        sets: "3",
        reps: "8-12",
        info: "Shoulders.",
    },
    CatalogEntry {
        name: "Dumbbell Bicep Curls",
        sets: "3",
        reps: "10-15",
        info: "Biceps isolation.",
    },
    CatalogEntry {
        name: "Dumbbell Triceps Extensions (Overhead)",
        sets: "3",
        reps: "10-15",
        info: "Triceps isolation.",
    },
    CatalogEntry {
        name: "Dumbbell Side Raises",
        sets: "3",
        reps: "10-15",
        info: "Targets side deltoids for shoulder width.",
    },
    CatalogEntry {
        name: "Dumbbell Front Raises",
        sets: "3",
        reps: "10-15",
        info: "Targets front deltoids for shoulder strength.",
    },
    CatalogEntry {
        name: "Dumbbell Hammer Curls",
        sets: "3",
        reps: "10-15 per arm",
        info: "Targets the biceps and forearms.",
    },
    CatalogEntry {
        name: "Dumbbell Skull Crushers (on the floor)",
        sets: "3",
        reps: "10-15",
        info: "Excellent isolation exercise for the triceps.",
    },
    CatalogEntry {
        name: "Decline Push-ups",
        sets: "3-4",
        reps: "AMRAP",
        info: "Increases the difficulty of standard push-ups by elevating your feet.",
    },
    CatalogEntry {
        name: "T-Plank Rotations",
        sets: "3",
        reps: "8-10 per side",
        info: "A dynamic core and shoulder stability exercise.",
    },
];

const LOWER_BODY_CORE: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Squats (Bodyweight/Goblet Squat)",
        sets: "3-4",
        reps: "8-15",
        info: "Works quads, glutes, hamstrings.",
    },
    CatalogEntry {
        name: "Lunges (Bodyweight/Dumbbell)",
        sets: "3",
        reps: "8-12 per leg",
        info: "Quads, glutes, hamstrings, balance.",
    },
    CatalogEntry {
        name: "Glute Bridges",
        sets: "3",
        reps: "12-20",
        info: "Targets glutes and hamstrings.",
    },
    CatalogEntry {
        name: "Romanian Deadlift (Dumbbell RDL)",
        sets: "3",
        reps: "10-15",
        info: "Excellent for hamstrings and glutes with dumbbells.",
    },
    CatalogEntry {
        name: "Calf Raises (Bodyweight/Dumbbell)",
        sets: "3-4",
        reps: "15-20",
        info: "Calf muscles.",
    },
    CatalogEntry {
        name: "Plank",
        sets: "3",
        reps: "30-60 seconds hold",
        info: "Core strength.",
    },
    CatalogEntry {
        name: "Crunches",
        sets: "3",
        reps: "15-20",
        info: "Upper abs.",
    },
    CatalogEntry {
        name: "Russian Twists",
        sets: "3",
        reps: "15-20 per side",
        info: "Obliques.",
    },
    CatalogEntry {
        name: "Leg Raises",
        sets: "3",
        reps: "15-20",
        info: "Targets lower abs.",
    },
    CatalogEntry {
        name: "Flutter Kicks",
        sets: "3",
        reps: "30-60 seconds",
        info: "Engages lower abs and hip flexors.",
    },
    CatalogEntry {
        name: "Bulgarian Split Squats",
        sets: "3",
        reps: "8-12 per leg",
        info: "Targets one leg at a time to improve balance and strength.",
    },
    CatalogEntry {
        name: "Single-Leg Romanian Deadlifts (RDLs)",
        sets: "3",
        reps: "8-12 per leg",
        info: "Works the hamstrings, glutes, and improves stability.",
    },
    CatalogEntry {
        name: "Calf Raises (Single-Leg)",
        sets: "3",
        reps: "15-20 per leg",
        info: "Increases the intensity of calf work.",
    },
    CatalogEntry {
        name: "Side Plank",
        sets: "3",
        reps: "30-60 seconds hold per side",
        info: "Targets the obliques and improves core stability.",
    },
];

const CARDIO: &[CatalogEntry] = &[
    CatalogEntry {
        name: "High Knees",
        sets: "3",
        reps: "30-60 seconds",
        info: "Improves cardio and leg strength.",
    },
    CatalogEntry {
        name: "Butt Kicks",
        sets: "3",
        reps: "30-60 seconds",
        info: "Targets hamstrings and cardio.",
    },
    CatalogEntry {
        name: "Mountain Climbers",
        sets: "3",
        reps: "30-60 seconds",
        info: "Full body, high intensity.",
    },
    CatalogEntry {
        name: "Burpees",
        sets: "3",
        reps: "8-12",
        info: "Full body, high intensity, advanced.",
    },
    CatalogEntry {
        name: "Jump Rope",
        sets: "3",
        reps: "1-2 minutes",
        info: "Excellent cardio and coordination.",
    },
];

const STRETCHING: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Cat-Cow Stretch",
        sets: "2",
        reps: "10-15 reps",
        info: "Improves spinal mobility and flexibility.",
    },
    CatalogEntry {
        name: "Seated Hamstring Stretch",
        sets: "2",
        reps: "30-60 seconds hold per leg",
        info: "Stretches the hamstrings and lower back.",
    },
    CatalogEntry {
        name: "Pigeon Pose",
        sets: "2",
        reps: "30-60 seconds hold per side",
        info: "A deep stretch for the hips and glutes.",
    },
];

const GROUPS: &[CatalogGroup] = &[
    CatalogGroup {
        title: "Warm-up",
        entries: WARM_UP,
    },
    CatalogGroup {
        title: "Upper Body (Bodyweight/Dumbbell)",
        entries: UPPER_BODY,
    },
    CatalogGroup {
        title: "Lower Body & Core (Bodyweight/Dumbbell)",
        entries: LOWER_BODY_CORE,
    },
    CatalogGroup {
        title: "Cardio",
        entries: CARDIO,
    },
    CatalogGroup {
        title: "Stretching & Mobility",
        entries: STRETCHING,
    },
];

/// All catalog groups in display order
#[must_use]
pub const fn groups() -> &'static [CatalogGroup] {
    GROUPS
}

/// Look up a catalog entry by exact name
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    GROUPS
        .iter()
        .flat_map(|group| group.entries.iter())
        .find(|entry| entry.name == name)
}

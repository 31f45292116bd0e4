// src/catalog.rs
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::Language;

/// Muscle groups targeted by catalog exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Core,
    Quads,
    Hamstrings,
    Calves,
    Glutes,
    FullBody,
}

impl MuscleGroup {
    /// Display name in the given language (the app ships English and Swedish).
    pub const fn display_name(self, language: Language) -> &'static str {
        match language {
            Language::English => self.english_name(),
            Language::Swedish => self.swedish_name(),
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Forearms => "Forearms",
            Self::Core => "Core",
            Self::Quads => "Quadriceps",
            Self::Hamstrings => "Hamstrings",
            Self::Calves => "Calves",
            Self::Glutes => "Glutes",
            Self::FullBody => "Full Body",
        }
    }

    pub const fn swedish_name(self) -> &'static str {
        match self {
            Self::Chest => "Bröst",
            Self::Back => "Rygg",
            Self::Shoulders => "Axlar",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Forearms => "Underarmar",
            Self::Core => "Mage",
            Self::Quads => "Framlår",
            Self::Hamstrings => "Baklår",
            Self::Calves => "Vader",
            Self::Glutes => "Rumpa",
            Self::FullBody => "Hela Kroppen",
        }
    }

    /// All muscle groups, sorted by display name in the given language.
    pub fn sorted_by_name(language: Language) -> Vec<Self> {
        let mut groups: Vec<Self> = Self::iter().collect();
        groups.sort_by(|a, b| a.display_name(language).cmp(b.display_name(language)));
        groups
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExerciseType {
    Compound,
    Isolation,
    Cardio,
    Stretching,
}

/// A predefined catalog exercise. Reference data only, never mutated.
///
/// `is_compound` is asserted by the catalog author and kept for display;
/// it is not derived from `type_`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub primary_muscles: &'static [MuscleGroup],
    pub secondary_muscles: &'static [MuscleGroup],
    pub type_: ExerciseType,
    pub equipment: &'static [&'static str],
    pub is_compound: bool,
}

impl Exercise {
    /// True if the exercise targets `group` as a primary or secondary muscle.
    pub fn targets(&self, group: MuscleGroup) -> bool {
        self.primary_muscles.contains(&group) || self.secondary_muscles.contains(&group)
    }
}

use ExerciseType::{Cardio, Compound, Isolation};
use MuscleGroup::*;

const CATALOG: &[Exercise] = &[
    // Chest
    Exercise {
        id: "bench-press",
        name: "Barbell Bench Press",
        primary_muscles: &[Chest],
        secondary_muscles: &[Shoulders, Triceps],
        type_: Compound,
        equipment: &["Barbell", "Bench"],
        is_compound: true,
    },
    Exercise {
        id: "dumbbell-press",
        name: "Dumbbell Chest Press",
        primary_muscles: &[Chest],
        secondary_muscles: &[Shoulders, Triceps],
        type_: Compound,
        equipment: &["Dumbbells", "Bench"],
        is_compound: true,
    },
    Exercise {
        id: "push-ups",
        name: "Push-Ups",
        primary_muscles: &[Chest],
        secondary_muscles: &[Shoulders, Triceps, Core],
        type_: Compound,
        equipment: &["Bodyweight"],
        is_compound: true,
    },
    Exercise {
        id: "incline-press",
        name: "Incline Barbell Press",
        primary_muscles: &[Chest],
        secondary_muscles: &[Shoulders, Triceps],
        type_: Compound,
        equipment: &["Barbell", "Incline Bench"],
        is_compound: true,
    },
    Exercise {
        id: "chest-flyes",
        name: "Dumbbell Flyes",
        primary_muscles: &[Chest],
        secondary_muscles: &[Shoulders],
        type_: Isolation,
        equipment: &["Dumbbells", "Bench"],
        is_compound: false,
    },
    Exercise {
        id: "cable-flyes",
        name: "Cable Flyes",
        primary_muscles: &[Chest],
        secondary_muscles: &[Shoulders],
        type_: Isolation,
        equipment: &["Cable Machine"],
        is_compound: false,
    },
    // Back
    Exercise {
        id: "deadlift",
        name: "Barbell Deadlift",
        primary_muscles: &[Back],
        secondary_muscles: &[Glutes, Hamstrings, Core],
        type_: Compound,
        equipment: &["Barbell", "Weight Plates"],
        is_compound: true,
    },
    Exercise {
        id: "pull-ups",
        name: "Pull-Ups",
        primary_muscles: &[Back],
        secondary_muscles: &[Biceps, Shoulders],
        type_: Compound,
        equipment: &["Pull-Up Bar"],
        is_compound: true,
    },
    Exercise {
        id: "barbell-rows",
        name: "Barbell Rows",
        primary_muscles: &[Back],
        secondary_muscles: &[Biceps, Shoulders],
        type_: Compound,
        equipment: &["Barbell", "Weight Plates"],
        is_compound: true,
    },
    Exercise {
        id: "lat-pulldowns",
        name: "Lat Pulldowns",
        primary_muscles: &[Back],
        secondary_muscles: &[Biceps, Shoulders],
        type_: Compound,
        equipment: &["Lat Pulldown Machine"],
        is_compound: true,
    },
    Exercise {
        id: "face-pulls",
        name: "Face Pulls",
        primary_muscles: &[Back],
        secondary_muscles: &[Shoulders],
        type_: Isolation,
        equipment: &["Cable Machine", "Rope Attachment"],
        is_compound: false,
    },
    // Shoulders
    Exercise {
        id: "overhead-press",
        name: "Overhead Press",
        primary_muscles: &[Shoulders],
        secondary_muscles: &[Triceps, Core],
        type_: Compound,
        equipment: &["Barbell"],
        is_compound: true,
    },
    Exercise {
        id: "lateral-raises",
        name: "Lateral Raises",
        primary_muscles: &[Shoulders],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Dumbbells"],
        is_compound: false,
    },
    Exercise {
        id: "front-raises",
        name: "Front Raises",
        primary_muscles: &[Shoulders],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Dumbbells"],
        is_compound: false,
    },
    Exercise {
        id: "rear-delt-flyes",
        name: "Rear Delt Flyes",
        primary_muscles: &[Shoulders],
        secondary_muscles: &[Back],
        type_: Isolation,
        equipment: &["Dumbbells"],
        is_compound: false,
    },
    // Biceps
    Exercise {
        id: "barbell-curls",
        name: "Barbell Curls",
        primary_muscles: &[Biceps],
        secondary_muscles: &[Forearms],
        type_: Isolation,
        equipment: &["Barbell"],
        is_compound: false,
    },
    Exercise {
        id: "dumbbell-curls",
        name: "Dumbbell Curls",
        primary_muscles: &[Biceps],
        secondary_muscles: &[Forearms],
        type_: Isolation,
        equipment: &["Dumbbells"],
        is_compound: false,
    },
    Exercise {
        id: "hammer-curls",
        name: "Hammer Curls",
        primary_muscles: &[Biceps],
        secondary_muscles: &[Forearms],
        type_: Isolation,
        equipment: &["Dumbbells"],
        is_compound: false,
    },
    Exercise {
        id: "preacher-curls",
        name: "Preacher Curls",
        primary_muscles: &[Biceps],
        secondary_muscles: &[Forearms],
        type_: Isolation,
        equipment: &["Preacher Bench", "Barbell or Dumbbells"],
        is_compound: false,
    },
    // Triceps
    Exercise {
        id: "tricep-dips",
        name: "Tricep Dips",
        primary_muscles: &[Triceps],
        secondary_muscles: &[Chest, Shoulders],
        type_: Compound,
        equipment: &["Dip Bars"],
        is_compound: true,
    },
    Exercise {
        id: "tricep-pushdowns",
        name: "Tricep Pushdowns",
        primary_muscles: &[Triceps],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Cable Machine", "Bar Attachment"],
        is_compound: false,
    },
    Exercise {
        id: "skull-crushers",
        name: "Skull Crushers",
        primary_muscles: &[Triceps],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Barbell or Dumbbells", "Bench"],
        is_compound: false,
    },
    Exercise {
        id: "overhead-tricep-extension",
        name: "Overhead Tricep Extension",
        primary_muscles: &[Triceps],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Dumbbell"],
        is_compound: false,
    },
    // Legs
    Exercise {
        id: "squats",
        name: "Barbell Squats",
        primary_muscles: &[Quads],
        secondary_muscles: &[Glutes, Hamstrings, Core],
        type_: Compound,
        equipment: &["Barbell", "Squat Rack"],
        is_compound: true,
    },
    Exercise {
        id: "leg-press",
        name: "Leg Press",
        primary_muscles: &[Quads],
        secondary_muscles: &[Glutes, Hamstrings],
        type_: Compound,
        equipment: &["Leg Press Machine"],
        is_compound: true,
    },
    Exercise {
        id: "leg-extensions",
        name: "Leg Extensions",
        primary_muscles: &[Quads],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Leg Extension Machine"],
        is_compound: false,
    },
    Exercise {
        id: "leg-curls",
        name: "Leg Curls",
        primary_muscles: &[Hamstrings],
        secondary_muscles: &[Calves],
        type_: Isolation,
        equipment: &["Leg Curl Machine"],
        is_compound: false,
    },
    Exercise {
        id: "calf-raises",
        name: "Standing Calf Raises",
        primary_muscles: &[Calves],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Calf Raise Machine or Step"],
        is_compound: false,
    },
    // Core
    Exercise {
        id: "plank",
        name: "Plank",
        primary_muscles: &[Core],
        secondary_muscles: &[Shoulders],
        type_: Isolation,
        equipment: &["Bodyweight"],
        is_compound: false,
    },
    Exercise {
        id: "crunches",
        name: "Crunches",
        primary_muscles: &[Core],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Bodyweight"],
        is_compound: false,
    },
    Exercise {
        id: "russian-twists",
        name: "Russian Twists",
        primary_muscles: &[Core],
        secondary_muscles: &[],
        type_: Isolation,
        equipment: &["Weight (optional)"],
        is_compound: false,
    },
    // Cardio
    Exercise {
        id: "treadmill-running",
        name: "Treadmill Running",
        primary_muscles: &[FullBody],
        secondary_muscles: &[],
        type_: Cardio,
        equipment: &["Treadmill"],
        is_compound: true,
    },
    Exercise {
        id: "stationary-bike",
        name: "Stationary Bike",
        primary_muscles: &[Quads],
        secondary_muscles: &[Calves, Glutes],
        type_: Cardio,
        equipment: &["Stationary Bike"],
        is_compound: true,
    },
    Exercise {
        id: "rowing-machine",
        name: "Rowing Machine",
        primary_muscles: &[Back],
        secondary_muscles: &[Quads, Core, Shoulders],
        type_: Cardio,
        equipment: &["Rowing Machine"],
        is_compound: true,
    },
];

/// The full exercise catalog, in declaration order.
pub const fn all() -> &'static [Exercise] {
    CATALOG
}

/// Exercises whose primary or secondary muscles include `group`.
pub fn by_muscle_group(group: MuscleGroup) -> Vec<&'static Exercise> {
    CATALOG.iter().filter(|ex| ex.targets(group)).collect()
}

/// Exercises of exactly the given type.
pub fn by_type(type_: ExerciseType) -> Vec<&'static Exercise> {
    CATALOG.iter().filter(|ex| ex.type_ == type_).collect()
}

/// Case-insensitive substring match on the exercise name.
///
/// The empty string matches everything; callers that want "no search" should
/// skip the call rather than pass a blank term.
pub fn search(term: &str) -> Vec<&'static Exercise> {
    let term = term.to_lowercase();
    CATALOG
        .iter()
        .filter(|ex| ex.name.to_lowercase().contains(&term))
        .collect()
}

pub fn by_id(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|ex| ex.id == id)
}

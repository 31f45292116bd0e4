// src/workout.rs
use thiserror::Error;

use crate::catalog::Exercise;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkoutError {
    #[error("No exercise selected. Pick an exercise before adding it.")]
    NoExerciseSelected,
    #[error("No exercise at position {0} in the active workout.")]
    ExerciseIndexOutOfBounds(usize),
    #[error("No set at position {set} for exercise {exercise}.")]
    SetIndexOutOfBounds { exercise: usize, set: usize },
    #[error("Set {set} of exercise {exercise} is completed; un-complete it before editing.")]
    SetCompleted { exercise: usize, set: usize },
}

/// The editable fields of a set. Reps are floored to whole numbers on write,
/// weight keeps its fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Reps,
    Weight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: String,
    pub set_number: i64,
    pub reps: i64,
    pub weight: f64,
    pub completed: bool,
}

impl WorkoutSet {
    fn new(exercise_id: &str, set_number: i64) -> Self {
        Self {
            id: format!("{exercise_id}-set-{set_number}"),
            set_number,
            reps: 0,
            weight: 0.0,
            completed: false,
        }
    }
}

/// One catalog exercise added to the active workout, with its ordered sets.
/// Created with exactly one set; the set list is never empty while the entry
/// exists. `sets[i].set_number == i + 1` holds after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkoutSummary {
    pub total_sets: usize,
    pub completed_sets: usize,
}

/// The in-progress workout: an ordered list of exercises, each with ordered
/// sets. All mutation goes through the methods below; a rejected operation
/// leaves the aggregate unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveWorkout {
    pub exercises: Vec<WorkoutExercise>,
}

impl ActiveWorkout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Appends a catalog exercise with one empty set.
    ///
    /// The same exercise may be added multiple times as distinct entries;
    /// nothing deduplicates or merges them.
    pub fn add_exercise(&mut self, exercise: Option<&Exercise>) -> Result<(), WorkoutError> {
        let exercise = exercise.ok_or(WorkoutError::NoExerciseSelected)?;
        self.exercises.push(WorkoutExercise {
            exercise: *exercise,
            sets: vec![WorkoutSet::new(exercise.id, 1)],
        });
        Ok(())
    }

    /// Removes an exercise entry and all of its sets. Remaining entries are
    /// not renumbered; their position is implicit in list order.
    pub fn remove_exercise(&mut self, index: usize) -> Result<(), WorkoutError> {
        if index >= self.exercises.len() {
            return Err(WorkoutError::ExerciseIndexOutOfBounds(index));
        }
        self.exercises.remove(index);
        Ok(())
    }

    /// Appends an empty set numbered `current count + 1`.
    pub fn add_set(&mut self, exercise_index: usize) -> Result<(), WorkoutError> {
        let entry = self
            .exercises
            .get_mut(exercise_index)
            .ok_or(WorkoutError::ExerciseIndexOutOfBounds(exercise_index))?;
        let set_number = entry.sets.len() as i64 + 1;
        entry.sets.push(WorkoutSet::new(entry.exercise.id, set_number));
        Ok(())
    }

    /// Flips `completed` on one set. No other field changes.
    pub fn toggle_set_completion(
        &mut self,
        exercise_index: usize,
        set_index: usize,
    ) -> Result<(), WorkoutError> {
        let set = self.get_set_mut(exercise_index, set_index)?;
        set.completed = !set.completed;
        Ok(())
    }

    /// Writes a reps or weight value from raw keypad text.
    ///
    /// Parsing is deliberately lenient: anything that fails to parse becomes 0,
    /// and negative input clamps to 0. Reps are floored to an integer, weight
    /// is stored as entered. Editing a completed set is rejected; toggle it
    /// back first.
    pub fn update_set_field(
        &mut self,
        exercise_index: usize,
        set_index: usize,
        field: SetField,
        raw_value: &str,
    ) -> Result<(), WorkoutError> {
        let set = self.get_set_mut(exercise_index, set_index)?;
        if set.completed {
            return Err(WorkoutError::SetCompleted {
                exercise: exercise_index,
                set: set_index,
            });
        }
        let value = raw_value.trim().parse::<f64>().unwrap_or(0.0).max(0.0);
        match field {
            SetField::Reps => set.reps = value.floor() as i64,
            SetField::Weight => set.weight = value,
        }
        Ok(())
    }

    /// Total and completed set counts across all exercises.
    pub fn summary(&self) -> WorkoutSummary {
        let total_sets = self.exercises.iter().map(|ex| ex.sets.len()).sum();
        let completed_sets = self
            .exercises
            .iter()
            .flat_map(|ex| ex.sets.iter())
            .filter(|set| set.completed)
            .count();
        WorkoutSummary {
            total_sets,
            completed_sets,
        }
    }

    fn get_set_mut(
        &mut self,
        exercise_index: usize,
        set_index: usize,
    ) -> Result<&mut WorkoutSet, WorkoutError> {
        let entry = self
            .exercises
            .get_mut(exercise_index)
            .ok_or(WorkoutError::ExerciseIndexOutOfBounds(exercise_index))?;
        entry
            .sets
            .get_mut(set_index)
            .ok_or(WorkoutError::SetIndexOutOfBounds {
                exercise: exercise_index,
                set: set_index,
            })
    }
}

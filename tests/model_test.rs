use anyhow::Result;
use tompa_training_lib::{
    catalog, ActiveWorkout, ExercisePicker, ExerciseType, Language, MuscleGroup, PickerError,
    SelectionMode, SetField, WorkoutError,
};

// --- Catalog ---

#[test]
fn test_catalog_lookups() {
    let all = catalog::all();
    assert!(!all.is_empty());

    let bench = catalog::by_id("bench-press").expect("bench press in catalog");
    assert_eq!(bench.name, "Barbell Bench Press");
    assert!(bench.targets(MuscleGroup::Chest));
    assert!(bench.targets(MuscleGroup::Triceps)); // secondary counts too
    assert!(!bench.targets(MuscleGroup::Calves));
    assert!(catalog::by_id("no-such-exercise").is_none());

    let chest = catalog::by_muscle_group(MuscleGroup::Chest);
    assert!(chest.iter().all(|ex| ex.targets(MuscleGroup::Chest)));
    assert!(chest.iter().any(|ex| ex.id == "bench-press"));

    let cardio = catalog::by_type(ExerciseType::Cardio);
    assert!(!cardio.is_empty());
    assert!(cardio.iter().all(|ex| ex.type_ == ExerciseType::Cardio));
}

#[test]
fn test_catalog_search_is_case_insensitive_substring() {
    let hits = catalog::search("PRESS");
    assert!(hits.iter().any(|ex| ex.id == "bench-press"));
    assert!(hits.iter().any(|ex| ex.id == "overhead-press"));
    assert!(hits.iter().all(|ex| ex.name.to_lowercase().contains("press")));

    assert!(catalog::search("zzzz").is_empty());
}

#[test]
fn test_muscle_group_names_follow_language() {
    assert_eq!(MuscleGroup::Chest.display_name(Language::English), "Chest");
    assert_eq!(MuscleGroup::Chest.display_name(Language::Swedish), "Bröst");

    let sorted = MuscleGroup::sorted_by_name(Language::English);
    assert_eq!(sorted.len(), 12);
    let names: Vec<&str> = sorted
        .iter()
        .map(|g| g.display_name(Language::English))
        .collect();
    let mut expected = names.clone();
    expected.sort_unstable();
    assert_eq!(names, expected);
}

// --- Picker ---

#[test]
fn test_picker_search_replaces_then_type_narrows() {
    let mut picker = ExercisePicker::new(SelectionMode::Multi);
    assert_eq!(picker.filtered().len(), catalog::all().len());

    picker.set_type_filter(Some(ExerciseType::Isolation));
    let isolation_count = picker.filtered().len();
    assert!(isolation_count > 0);

    // Search replaces the working set; type then narrows it
    picker.set_search("curls");
    let curls = picker.filtered();
    assert!(!curls.is_empty());
    assert!(curls
        .iter()
        .all(|ex| ex.type_ == ExerciseType::Isolation
            && ex.name.to_lowercase().contains("curls")));

    // Blank search falls back to the full catalog before the type filter
    picker.set_search("   ");
    assert_eq!(picker.filtered().len(), isolation_count);
}

#[test]
fn test_picker_clear_filters_keeps_selection() -> Result<()> {
    let mut picker = ExercisePicker::new(SelectionMode::Multi);
    let bench = catalog::by_id("bench-press").unwrap();
    picker.toggle(bench)?;
    picker.set_search("deadlift");
    picker.set_type_filter(Some(ExerciseType::Compound));

    picker.clear_filters();
    assert_eq!(picker.search_text(), "");
    assert_eq!(picker.type_filter(), None);
    assert!(picker.is_selected(bench));

    Ok(())
}

#[test]
fn test_picker_single_mode_replaces_selection() -> Result<()> {
    let mut picker = ExercisePicker::new(SelectionMode::Single);
    let bench = catalog::by_id("bench-press").unwrap();
    let squats = catalog::by_id("squats").unwrap();

    picker.toggle(bench)?;
    picker.toggle(squats)?;
    assert_eq!(picker.selection().len(), 1);
    assert!(picker.is_selected(squats));
    assert!(!picker.is_selected(bench));

    Ok(())
}

#[test]
fn test_picker_multi_mode_toggles_and_caps() -> Result<()> {
    let mut picker = ExercisePicker::new(SelectionMode::Multi).with_max_selections(2);
    let bench = catalog::by_id("bench-press").unwrap();
    let squats = catalog::by_id("squats").unwrap();
    let deadlift = catalog::by_id("deadlift").unwrap();

    picker.toggle(bench)?;
    picker.toggle(squats)?;
    assert_eq!(
        picker.toggle(deadlift),
        Err(PickerError::SelectionFull(2))
    );
    // The rejected pick leaves the selection untouched
    assert_eq!(picker.selection().len(), 2);
    assert!(picker.is_selected(bench));
    assert!(!picker.is_selected(deadlift));

    // Toggling off frees a slot
    picker.toggle(bench)?;
    picker.toggle(deadlift)?;
    assert!(picker.is_selected(deadlift));

    let taken = picker.take_selection();
    assert_eq!(taken.len(), 2);
    assert!(picker.selection().is_empty());

    Ok(())
}

// --- Active workout ---

#[test]
fn test_add_exercise_starts_with_one_set() -> Result<()> {
    let bench = catalog::by_id("bench-press").unwrap();
    let mut workout = ActiveWorkout::new();

    assert_eq!(
        workout.add_exercise(None),
        Err(WorkoutError::NoExerciseSelected)
    );
    assert!(workout.is_empty());

    workout.add_exercise(Some(bench))?;
    assert_eq!(workout.exercises.len(), 1);
    assert_eq!(workout.exercises[0].sets.len(), 1);
    let set = &workout.exercises[0].sets[0];
    assert_eq!(set.set_number, 1);
    assert_eq!(set.id, "bench-press-set-1");
    assert_eq!(set.reps, 0);
    assert!(!set.completed);

    // Duplicates are distinct entries
    workout.add_exercise(Some(bench))?;
    assert_eq!(workout.exercises.len(), 2);

    Ok(())
}

#[test]
fn test_add_set_numbering_invariant() -> Result<()> {
    let bench = catalog::by_id("bench-press").unwrap();
    let mut workout = ActiveWorkout::new();
    workout.add_exercise(Some(bench))?;
    workout.add_set(0)?;
    workout.add_set(0)?;

    for (i, set) in workout.exercises[0].sets.iter().enumerate() {
        assert_eq!(set.set_number, i as i64 + 1);
    }
    assert_eq!(
        workout.add_set(3),
        Err(WorkoutError::ExerciseIndexOutOfBounds(3))
    );

    Ok(())
}

#[test]
fn test_remove_exercise_leaves_others_untouched() -> Result<()> {
    let bench = catalog::by_id("bench-press").unwrap();
    let squats = catalog::by_id("squats").unwrap();
    let mut workout = ActiveWorkout::new();
    workout.add_exercise(Some(bench))?;
    workout.add_exercise(Some(squats))?;
    workout.add_set(1)?;
    workout.update_set_field(1, 0, SetField::Reps, "5")?;

    let squat_entry = workout.exercises[1].clone();
    workout.remove_exercise(0)?;
    assert_eq!(workout.exercises.len(), 1);
    assert_eq!(workout.exercises[0], squat_entry);

    assert_eq!(
        workout.remove_exercise(7),
        Err(WorkoutError::ExerciseIndexOutOfBounds(7))
    );

    Ok(())
}

#[test]
fn test_toggle_set_completion_is_self_inverse() -> Result<()> {
    let bench = catalog::by_id("bench-press").unwrap();
    let mut workout = ActiveWorkout::new();
    workout.add_exercise(Some(bench))?;
    workout.update_set_field(0, 0, SetField::Reps, "10")?;

    let before = workout.exercises[0].sets[0].clone();
    workout.toggle_set_completion(0, 0)?;
    assert!(workout.exercises[0].sets[0].completed);
    assert_eq!(workout.exercises[0].sets[0].reps, before.reps);
    workout.toggle_set_completion(0, 0)?;
    assert_eq!(workout.exercises[0].sets[0], before);

    assert_eq!(
        workout.toggle_set_completion(0, 5),
        Err(WorkoutError::SetIndexOutOfBounds { exercise: 0, set: 5 })
    );

    Ok(())
}

#[test]
fn test_update_set_field_parses_leniently() -> Result<()> {
    let bench = catalog::by_id("bench-press").unwrap();
    let mut workout = ActiveWorkout::new();
    workout.add_exercise(Some(bench))?;

    // Unparsable text becomes 0
    workout.update_set_field(0, 0, SetField::Reps, "abc")?;
    assert_eq!(workout.exercises[0].sets[0].reps, 0);

    // Reps are floored, weight keeps its fraction
    workout.update_set_field(0, 0, SetField::Reps, "12.9")?;
    assert_eq!(workout.exercises[0].sets[0].reps, 12);
    workout.update_set_field(0, 0, SetField::Weight, "12.9")?;
    assert!((workout.exercises[0].sets[0].weight - 12.9).abs() < f64::EPSILON);

    // Negative input clamps to 0
    workout.update_set_field(0, 0, SetField::Reps, "-4")?;
    assert_eq!(workout.exercises[0].sets[0].reps, 0);
    workout.update_set_field(0, 0, SetField::Weight, "-2.5")?;
    assert!((workout.exercises[0].sets[0].weight - 0.0).abs() < f64::EPSILON);

    // Surrounding whitespace is ignored
    workout.update_set_field(0, 0, SetField::Weight, "  80.5 ")?;
    assert!((workout.exercises[0].sets[0].weight - 80.5).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn test_completed_set_rejects_edits() -> Result<()> {
    let bench = catalog::by_id("bench-press").unwrap();
    let mut workout = ActiveWorkout::new();
    workout.add_exercise(Some(bench))?;
    workout.update_set_field(0, 0, SetField::Reps, "8")?;
    workout.toggle_set_completion(0, 0)?;

    assert_eq!(
        workout.update_set_field(0, 0, SetField::Reps, "10"),
        Err(WorkoutError::SetCompleted { exercise: 0, set: 0 })
    );
    assert_eq!(workout.exercises[0].sets[0].reps, 8);

    // Un-completing makes it editable again
    workout.toggle_set_completion(0, 0)?;
    workout.update_set_field(0, 0, SetField::Reps, "10")?;
    assert_eq!(workout.exercises[0].sets[0].reps, 10);

    Ok(())
}

#[test]
fn test_summary_counts_total_and_completed() -> Result<()> {
    let bench = catalog::by_id("bench-press").unwrap();
    let squats = catalog::by_id("squats").unwrap();
    let mut workout = ActiveWorkout::new();

    let empty = workout.summary();
    assert_eq!(empty.total_sets, 0);
    assert_eq!(empty.completed_sets, 0);

    workout.add_exercise(Some(bench))?;
    workout.add_set(0)?;
    workout.add_set(0)?;
    workout.add_exercise(Some(squats))?;
    workout.toggle_set_completion(0, 1)?;

    let summary = workout.summary();
    assert_eq!(summary.total_sets, 4);
    assert_eq!(summary.completed_sets, 1);

    Ok(())
}

// Picker feeding a workout, end to end in memory.
#[test]
fn test_picker_to_workout_flow() -> Result<()> {
    let mut picker = ExercisePicker::new(SelectionMode::Multi);
    picker.set_search("press");
    picker.set_type_filter(Some(ExerciseType::Compound));

    let filtered = picker.filtered();
    assert!(filtered.iter().any(|ex| ex.id == "bench-press"));
    let bench = *filtered.iter().find(|ex| ex.id == "bench-press").unwrap();
    picker.toggle(bench)?;

    let mut workout = ActiveWorkout::new();
    for exercise in picker.take_selection() {
        workout.add_exercise(Some(exercise))?;
    }
    workout.add_set(0)?;
    workout.update_set_field(0, 0, SetField::Reps, "8")?;
    workout.update_set_field(0, 0, SetField::Weight, "60")?;
    workout.toggle_set_completion(0, 0)?;
    workout.update_set_field(0, 1, SetField::Reps, "6")?;

    let summary = workout.summary();
    assert_eq!(summary.total_sets, 2);
    assert_eq!(summary.completed_sets, 1);

    Ok(())
}

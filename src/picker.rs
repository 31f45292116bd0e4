// src/picker.rs
use thiserror::Error;

use crate::catalog::{self, Exercise, ExerciseType};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PickerError {
    #[error("At most {0} exercise(s) can be selected.")]
    SelectionFull(usize),
}

/// Whether the picker keeps one exercise or a growing list. Fixed per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multi,
}

/// Composes catalog queries into a filterable, selectable exercise list.
///
/// Filtering order: a non-blank search term replaces the working set with the
/// catalog-wide search result, then the type filter narrows it. Both steps are
/// pure intersections against the full catalog, so the order only matters for
/// how the list is built, not for which exercises end up in it.
#[derive(Debug)]
pub struct ExercisePicker {
    search: String,
    type_filter: Option<ExerciseType>,
    mode: SelectionMode,
    max_selections: Option<usize>,
    selection: Vec<&'static Exercise>,
}

impl ExercisePicker {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            search: String::new(),
            type_filter: None,
            mode,
            max_selections: None,
            selection: Vec::new(),
        }
    }

    /// Caps the selection size. Only meaningful in multi mode.
    pub fn with_max_selections(mut self, max: usize) -> Self {
        self.max_selections = Some(max);
        self
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn set_type_filter(&mut self, type_: Option<ExerciseType>) {
        self.type_filter = type_;
    }

    /// Resets search text and type filter. The current selection is kept.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.type_filter = None;
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub const fn type_filter(&self) -> Option<ExerciseType> {
        self.type_filter
    }

    /// The catalog entries matching the current search and type filter.
    pub fn filtered(&self) -> Vec<&'static Exercise> {
        let trimmed = self.search.trim();
        let mut working: Vec<&'static Exercise> = if trimmed.is_empty() {
            catalog::all().iter().collect()
        } else {
            catalog::search(trimmed)
        };
        if let Some(type_) = self.type_filter {
            working.retain(|ex| ex.type_ == type_);
        }
        working
    }

    /// Selected iff an entry with the same id is already in the selection.
    pub fn is_selected(&self, exercise: &Exercise) -> bool {
        self.selection.iter().any(|sel| sel.id == exercise.id)
    }

    /// Selects or deselects an exercise.
    ///
    /// Single mode replaces the whole selection. Multi mode toggles: picking a
    /// selected exercise removes it, picking a new one appends unless the
    /// configured maximum is already reached, in which case the call fails and
    /// the selection is left untouched.
    pub fn toggle(&mut self, exercise: &'static Exercise) -> Result<(), PickerError> {
        match self.mode {
            SelectionMode::Single => {
                self.selection = vec![exercise];
                Ok(())
            }
            SelectionMode::Multi => {
                if self.is_selected(exercise) {
                    self.selection.retain(|sel| sel.id != exercise.id);
                    return Ok(());
                }
                if let Some(max) = self.max_selections {
                    if self.selection.len() >= max {
                        return Err(PickerError::SelectionFull(max));
                    }
                }
                self.selection.push(exercise);
                Ok(())
            }
        }
    }

    pub fn selection(&self) -> &[&'static Exercise] {
        &self.selection
    }

    /// Hands the selection to the caller and empties the picker.
    pub fn take_selection(&mut self) -> Vec<&'static Exercise> {
        std::mem::take(&mut self.selection)
    }
}

//! Exercise view-models

use crate::error::Result;
use crate::repo::ExerciseRepository;
use crate::types::Exercise;
use chrono::{DateTime, Utc};

/// State holder for the exercise list screen.
pub struct ExerciseListViewModel {
    exercises: Vec<Exercise>,
    repository: ExerciseRepository,
}

impl ExerciseListViewModel {
    /// Build the view-model and eagerly fetch the current list. A failed
    /// initial fetch is logged and leaves the list empty.
    pub fn new(repository: ExerciseRepository) -> Self {
        let mut vm = Self {
            exercises: Vec::new(),
            repository,
        };
        if let Err(err) = vm.reload() {
            tracing::warn!(%err, "initial exercise fetch failed");
        }
        vm
    }

    /// The fetched exercises, newest first.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Synchronously re-fetch from the repository and replace the
    /// collection. Safe to call repeatedly; on failure the previous
    /// collection is kept.
    pub fn reload(&mut self) -> Result<()> {
        self.exercises = self.repository.get_exercises()?;
        Ok(())
    }
}

/// Input state for the add-exercise form.
pub struct AddExerciseViewModel {
    /// Activity label, empty by default
    pub category: String,
    /// Session start, defaults to the construction-time now
    pub start_time: DateTime<Utc>,
    /// Session length in minutes
    pub duration_min: i64,
    /// Perceived intensity, 0-10
    pub intensity: i64,

    repository: ExerciseRepository,
}

impl AddExerciseViewModel {
    pub fn new(repository: ExerciseRepository) -> Self {
        Self {
            category: String::new(),
            start_time: Utc::now(),
            duration_min: 0,
            intensity: 0,
            repository,
        }
    }

    /// Persist the current inputs as a new exercise.
    ///
    /// Failures are logged and returned for the presentation layer to
    /// surface; the call never panics.
    pub fn add_exercise(&self) -> Result<()> {
        self.repository
            .add_exercise(
                &self.category,
                self.duration_min,
                self.intensity,
                self.start_time,
            )
            .map_err(|err| {
                tracing::warn!(%err, "failed to add exercise");
                err
            })
    }
}

//! Sleep view-models

use crate::error::Result;
use crate::repo::SleepRepository;
use crate::types::Sleep;
use chrono::{DateTime, Utc};

/// State holder for the sleep history screen.
pub struct SleepHistoryViewModel {
    sleep_sessions: Vec<Sleep>,
    repository: SleepRepository,
}

impl SleepHistoryViewModel {
    /// Build the view-model and eagerly fetch the current history. A failed
    /// initial fetch is logged and leaves the list empty.
    pub fn new(repository: SleepRepository) -> Self {
        let mut vm = Self {
            sleep_sessions: Vec::new(),
            repository,
        };
        if let Err(err) = vm.reload() {
            tracing::warn!(%err, "initial sleep history fetch failed");
        }
        vm
    }

    /// The fetched sleep sessions, newest first.
    pub fn sleep_sessions(&self) -> &[Sleep] {
        &self.sleep_sessions
    }

    /// Synchronously re-fetch from the repository and replace the
    /// collection. Safe to call repeatedly; on failure the previous
    /// collection is kept.
    pub fn reload(&mut self) -> Result<()> {
        self.sleep_sessions = self.repository.get_sleep_sessions()?;
        Ok(())
    }
}

/// Input state for the add-sleep-session form.
pub struct AddSleepSessionViewModel {
    /// Session start, defaults to the construction-time now
    pub start_time: DateTime<Utc>,
    /// Sleep length in minutes
    pub duration_min: i64,
    /// Perceived quality, 0-10
    pub quality: i64,

    repository: SleepRepository,
}

impl AddSleepSessionViewModel {
    pub fn new(repository: SleepRepository) -> Self {
        Self {
            start_time: Utc::now(),
            duration_min: 0,
            quality: 0,
            repository,
        }
    }

    /// Persist the current inputs as a new sleep session.
    ///
    /// Failures are logged and returned for the presentation layer to
    /// surface; the call never panics.
    pub fn add_sleep_session(&self) -> Result<()> {
        self.repository
            .add_sleep_session(self.start_time, self.duration_min, self.quality)
            .map_err(|err| {
                tracing::warn!(%err, "failed to add sleep session");
                err
            })
    }
}

//! Sleep repository

use crate::db::Database;
use crate::error::{Error, Result};
use crate::repo::UserRepository;
use crate::types::Sleep;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;

/// Query and insert operations for sleep records.
pub struct SleepRepository {
    db: Arc<Database>,
}

impl SleepRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All sleep sessions, most recent `start_date` first.
    pub fn get_sleep_sessions(&self) -> Result<Vec<Sleep>> {
        let conn = self.db.connection();
        let mut stmt =
            conn.prepare("SELECT * FROM sleep_sessions ORDER BY start_date DESC NULLS LAST")?;

        let sessions = stmt
            .query_map([], Self::row_to_sleep)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(sessions)
    }

    /// Create a new sleep session owned by the current user.
    ///
    /// Same contract as [`ExerciseRepository::add_exercise`]: fails with
    /// [`Error::NoOwner`] when no user exists and persists nothing in that
    /// case.
    ///
    /// [`ExerciseRepository::add_exercise`]: crate::repo::ExerciseRepository::add_exercise
    pub fn add_sleep_session(
        &self,
        start_date: DateTime<Utc>,
        duration_min: i64,
        quality: i64,
    ) -> Result<()> {
        let user = UserRepository::new(Arc::clone(&self.db))
            .get_user()?
            .ok_or(Error::NoOwner { record: "sleep" })?;

        let conn = self.db.connection();
        conn.execute(
            r#"
            INSERT INTO sleep_sessions (duration_min, quality, start_date, user_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                duration_min,
                quality,
                start_date.to_rfc3339(),
                user.id,
            ],
        )?;

        tracing::debug!(user_id = user.id, duration_min, "sleep session recorded");
        Ok(())
    }

    fn row_to_sleep(row: &Row) -> rusqlite::Result<Sleep> {
        let start_date_str: Option<String> = row.get("start_date")?;

        Ok(Sleep {
            id: row.get("id")?,
            duration_min: row.get("duration_min")?,
            quality: row.get("quality")?,
            start_date: start_date_str
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            user_id: row.get("user_id")?,
        })
    }
}

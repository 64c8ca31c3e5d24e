//! Exercise repository

use crate::db::Database;
use crate::error::{Error, Result};
use crate::repo::UserRepository;
use crate::types::Exercise;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;

/// Query and insert operations for exercise records.
pub struct ExerciseRepository {
    db: Arc<Database>,
}

impl ExerciseRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All exercises, most recent `start_date` first. An empty store yields
    /// an empty list, not an error.
    pub fn get_exercises(&self) -> Result<Vec<Exercise>> {
        let conn = self.db.connection();
        let mut stmt =
            conn.prepare("SELECT * FROM exercises ORDER BY start_date DESC NULLS LAST")?;

        let exercises = stmt
            .query_map([], Self::row_to_exercise)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(exercises)
    }

    /// Create a new exercise owned by the current user.
    ///
    /// Fails with [`Error::NoOwner`] when no user exists; nothing is
    /// persisted in that case. On success the row is committed before the
    /// call returns.
    pub fn add_exercise(
        &self,
        category: &str,
        duration_min: i64,
        intensity: i64,
        start_date: DateTime<Utc>,
    ) -> Result<()> {
        let user = UserRepository::new(Arc::clone(&self.db))
            .get_user()?
            .ok_or(Error::NoOwner { record: "exercise" })?;

        let conn = self.db.connection();
        conn.execute(
            r#"
            INSERT INTO exercises (category, duration_min, intensity, start_date, user_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                category,
                duration_min,
                intensity,
                start_date.to_rfc3339(),
                user.id,
            ],
        )?;

        tracing::debug!(user_id = user.id, category, duration_min, "exercise recorded");
        Ok(())
    }

    fn row_to_exercise(row: &Row) -> rusqlite::Result<Exercise> {
        let start_date_str: Option<String> = row.get("start_date")?;

        Ok(Exercise {
            id: row.get("id")?,
            category: row.get("category")?,
            duration_min: row.get("duration_min")?,
            intensity: row.get("intensity")?,
            start_date: start_date_str
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            user_id: row.get("user_id")?,
        })
    }
}

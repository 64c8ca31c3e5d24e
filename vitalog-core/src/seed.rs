//! Default-data seeding
//!
//! First-run bootstrap that guarantees a baseline user and a small sample
//! sleep history exist. Runs at process start, before any view-model
//! constructs, and is a no-op on every run after the first.

use crate::db::Database;
use crate::error::Result;
use crate::repo::{SleepRepository, UserRepository};
use chrono::Utc;
use rand::Rng;
use rusqlite::params;
use serde::Deserialize;
use std::sync::Arc;

/// Placeholder names for the seeded user
const PLACEHOLDER_FIRST_NAME: &str = "Johan";
const PLACEHOLDER_LAST_NAME: &str = "Trino";

/// Which side of "now" the seeded sleep dates fall on.
///
/// The original data set dated its samples forward from now; `Past` produces
/// a sleep history instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetDirection {
    Future,
    Past,
}

/// Seeding knobs, loadable from the `[seed]` config section
#[derive(Debug, Clone, Deserialize)]
pub struct SeedOptions {
    /// Number of sample sleep records to create on first run
    #[serde(default = "default_sleep_samples")]
    pub sleep_samples: u32,

    /// Direction of the 1..=N day offsets applied to "now"
    #[serde(default = "default_offset")]
    pub offset: OffsetDirection,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            sleep_samples: default_sleep_samples(),
            offset: default_offset(),
        }
    }
}

fn default_sleep_samples() -> u32 {
    5
}

fn default_offset() -> OffsetDirection {
    OffsetDirection::Future
}

/// Idempotent first-run bootstrap.
///
/// All creations commit in one transaction; a failure leaves no partial
/// seed data.
pub struct DefaultDataSeeder {
    db: Arc<Database>,
    options: SeedOptions,
}

impl DefaultDataSeeder {
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_options(db, SeedOptions::default())
    }

    pub fn with_options(db: Arc<Database>, options: SeedOptions) -> Self {
        Self { db, options }
    }

    /// Ensure default data exists.
    ///
    /// If a user is already present this does nothing, however often it is
    /// invoked. Otherwise it creates one placeholder user and, when the
    /// store holds no sleep records, `sleep_samples` sampled sleep sessions
    /// owned by that user.
    pub fn apply(&self) -> Result<()> {
        if UserRepository::new(Arc::clone(&self.db)).get_user()?.is_some() {
            tracing::debug!("user already present, skipping default data");
            return Ok(());
        }

        let need_sleep_samples = SleepRepository::new(Arc::clone(&self.db))
            .get_sleep_sessions()?
            .is_empty();

        let mut conn = self.db.connection();
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO users (first_name, last_name) VALUES (?1, ?2)",
            params![PLACEHOLDER_FIRST_NAME, PLACEHOLDER_LAST_NAME],
        )?;
        let user_id = tx.last_insert_rowid();

        if need_sleep_samples {
            let mut rng = rand::rng();

            for day_offset in 1..=i64::from(self.options.sleep_samples) {
                let delta = chrono::Duration::days(day_offset);
                let start_date = match self.options.offset {
                    OffsetDirection::Future => Utc::now() + delta,
                    OffsetDirection::Past => Utc::now() - delta,
                };

                tx.execute(
                    r#"
                    INSERT INTO sleep_sessions (duration_min, quality, start_date, user_id)
                    VALUES (?1, ?2, ?3, ?4)
                    "#,
                    params![
                        rng.random_range(0..=900i64),
                        rng.random_range(0..=10i64),
                        start_date.to_rfc3339(),
                        user_id,
                    ],
                )?;
            }
        }

        tx.commit()?;

        let sleep_samples = if need_sleep_samples {
            self.options.sleep_samples
        } else {
            0
        };
        tracing::info!(user_id, sleep_samples, "default data seeded");
        Ok(())
    }
}

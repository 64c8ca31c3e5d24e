//! Database schema and migrations
//!
//! Uses SQLite with embedded migrations managed via PRAGMA user_version.

use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: Initial schema
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name   TEXT,
        last_name    TEXT
    );

    CREATE TABLE IF NOT EXISTS exercises (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        category     TEXT,
        duration_min INTEGER NOT NULL DEFAULT 0,
        intensity    INTEGER NOT NULL DEFAULT 0,
        start_date   DATETIME,
        user_id      INTEGER REFERENCES users(id)
    );

    CREATE TABLE IF NOT EXISTS sleep_sessions (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        duration_min INTEGER NOT NULL DEFAULT 0,
        quality      INTEGER NOT NULL DEFAULT 0,
        start_date   DATETIME,
        user_id      INTEGER REFERENCES users(id)
    );

    -- List views always read newest-first
    CREATE INDEX IF NOT EXISTS idx_exercises_start_date ON exercises(start_date DESC);
    CREATE INDEX IF NOT EXISTS idx_sleep_sessions_start_date ON sleep_sessions(start_date DESC);
    CREATE INDEX IF NOT EXISTS idx_exercises_user ON exercises(user_id);
    CREATE INDEX IF NOT EXISTS idx_sleep_sessions_user ON sleep_sessions(user_id);
    "#,
];

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> crate::error::Result<()> {
    let current_version: i32 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .unwrap_or(0);

    tracing::info!(
        current_version,
        target_version = SCHEMA_VERSION,
        "Checking database migrations"
    );

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current_version {
            tracing::info!(version, "Running migration");
            conn.execute_batch(migration)?;
            conn.execute(&format!("PRAGMA user_version = {}", version), [])?;
        }
    }

    if current_version < SCHEMA_VERSION {
        tracing::info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Migrations complete"
        );
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> crate::error::Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}

//! Core domain types for vitalog
//!
//! Three record kinds make up the data model:
//!
//! | Term | Definition |
//! |------|------------|
//! | **User** | The single person the app tracks; owns every session record |
//! | **Exercise** | One recorded workout (category, duration, intensity) |
//! | **Sleep** | One recorded night of sleep (duration, quality) |
//!
//! The app is single-user by convention: exactly one [`User`] row is expected
//! in normal operation. Storage does not enforce this — the seeder creates at
//! most one, and repositories always fetch the first row.
//!
//! Records are immutable after creation. There is no update or delete
//! operation anywhere in the core contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The tracked person.
///
/// Owns zero or more [`Exercise`] and [`Sleep`] records via their `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Row id
    pub id: i64,
    /// Given name (optional)
    pub first_name: Option<String>,
    /// Family name (optional)
    pub last_name: Option<String>,
}

/// One recorded exercise session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Row id
    pub id: i64,
    /// Activity label, e.g. "Football" (optional)
    pub category: Option<String>,
    /// Session length in minutes
    pub duration_min: i64,
    /// Perceived intensity on a 0-10 scale (UI-enforced, not checked here)
    pub intensity: i64,
    /// When the session started
    pub start_date: Option<DateTime<Utc>>,
    /// Owning user; set by the public write path, nullable in schema
    pub user_id: Option<i64>,
}

/// One recorded sleep session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sleep {
    /// Row id
    pub id: i64,
    /// Sleep length in minutes
    pub duration_min: i64,
    /// Perceived quality on a 0-10 scale (UI-enforced, not checked here)
    pub quality: i64,
    /// When the session started
    pub start_date: Option<DateTime<Utc>>,
    /// Owning user; set by the public write path, nullable in schema
    pub user_id: Option<i64>,
}

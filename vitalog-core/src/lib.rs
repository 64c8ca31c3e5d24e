//! # vitalog-core
//!
//! Core library for vitalog - a personal health tracker.
//!
//! This library provides:
//! - Domain types for the tracked user, exercise sessions, and sleep sessions
//! - Database storage layer with SQLite
//! - Repositories as the sole access path to storage
//! - An idempotent first-run seeder
//! - View-model state holders with a manual reload contract
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! Data flows in one direction and back:
//! Presentation → View-Model → Repository → Storage, with the seeder running
//! once at startup before any view-model constructs. Everything is
//! synchronous; there are no background workers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitalog_core::{Config, Database, DefaultDataSeeder, ExerciseRepository};
//!
//! # fn main() -> vitalog_core::Result<()> {
//! let db = Arc::new(Database::open(&Config::database_path())?);
//! db.migrate()?;
//!
//! DefaultDataSeeder::new(Arc::clone(&db)).apply()?;
//!
//! let exercises = ExerciseRepository::new(db).get_exercises()?;
//! # Ok(())
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use repo::{ExerciseRepository, SleepRepository, UserRepository};
pub use seed::{DefaultDataSeeder, OffsetDirection, SeedOptions};
pub use types::*;
pub use viewmodel::{
    AddExerciseViewModel, AddSleepSessionViewModel, ExerciseListViewModel, SleepHistoryViewModel,
    UserDataViewModel,
};

// Public modules
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod repo;
pub mod seed;
pub mod types;
pub mod viewmodel;

//! Repositories
//!
//! The sole access path from application logic to the storage engine. Each
//! repository is a narrow façade over the shared [`Database`] handle passed
//! into its constructor.
//!
//! [`Database`]: crate::db::Database

pub mod exercise;
pub mod sleep;
pub mod user;

pub use exercise::ExerciseRepository;
pub use sleep::SleepRepository;
pub use user::UserRepository;

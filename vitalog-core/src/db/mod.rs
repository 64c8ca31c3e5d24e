//! Database layer for vitalog
//!
//! This module provides the storage layer using SQLite with:
//! - Schema migrations
//! - A shared connection handle passed into each repository

pub mod schema;
pub mod store;

pub use store::Database;

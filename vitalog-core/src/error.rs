//! Error types for vitalog-core

use thiserror::Error;

/// Main error type for the vitalog-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying datastore error
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A write required an owning user but none exists in the store
    #[error("no user exists to own the new {record} record")]
    NoOwner { record: &'static str },
}

/// Result type alias for vitalog-core
pub type Result<T> = std::result::Result<T, Error>;

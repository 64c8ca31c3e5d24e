//! User repository

use crate::db::Database;
use crate::error::{Error, Result};
use crate::types::User;
use rusqlite::{OptionalExtension, Row};
use std::sync::Arc;

/// Read access to the single expected user record.
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Returns the first user in the store's native order, or `None` when
    /// the store holds no user. Only one user is expected to exist; no
    /// particular order among multiple users is assumed.
    pub fn get_user(&self) -> Result<Option<User>> {
        let conn = self.db.connection();
        conn.query_row("SELECT * FROM users LIMIT 1", [], Self::row_to_user)
            .optional()
            .map_err(Error::from)
    }

    fn row_to_user(row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
        })
    }
}

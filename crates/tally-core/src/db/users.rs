//! User operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::info;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewUser, User};

const USER_COLUMNS: &str = "id, username, name, email, income, created_at";

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let created_at_str: String = row.get(5)?;
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        income: row.get(4)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Register a new user
    ///
    /// Fails with `Error::Conflict` if the username is already taken.
    pub fn create_user(&self, user: &NewUser) -> Result<User> {
        let id = {
            let conn = self.conn()?;
            // Duplicates are rejected by the UNIQUE constraint on username
            conn.execute(
                "INSERT INTO users (username, password, name, email, income) VALUES (?, ?, ?, ?, ?)",
                params![user.username, user.password, user.name, user.email, user.income],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    Error::Conflict(format!("Username already exists: {}", user.username))
                }
                e => Error::from(e),
            })?;
            conn.last_insert_rowid()
        };

        info!(user_id = id, username = %user.username, "User registered");

        self.get_user(id)?
            .ok_or_else(|| Error::NotFound(format!("User {}", id)))
    }

    /// Get a user by ID
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                params![id],
                row_to_user,
            )
            .optional()?;

        Ok(user)
    }

    /// Get a user by username (exact match)
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE username = ?", USER_COLUMNS),
                params![username],
                row_to_user,
            )
            .optional()?;

        Ok(user)
    }

    /// Check a username/password pair, returning the user on a match
    ///
    /// Passwords are stored and compared as plain text.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let stored: Option<(i64, String)> = conn
            .query_row(
                "SELECT id, password FROM users WHERE username = ?",
                params![username],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        drop(conn);

        match stored {
            Some((id, stored_password)) if stored_password == password => self.get_user(id),
            _ => Ok(None),
        }
    }

    /// List all users ordered by ID
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))?;

        let users = stmt
            .query_map([], row_to_user)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(users)
    }
}

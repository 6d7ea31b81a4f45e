//! Store traits consumed by the dashboard
//!
//! The aggregation code only needs read access to a user's expenses and to
//! the category registry. Keeping those behind traits lets the dashboard run
//! against the SQLite store, a fixture, or any other backing store.

use crate::db::Database;
use crate::error::Result;
use crate::models::{Category, Expense, User};

/// Looks up users by ID
pub trait UserDirectory {
    fn user(&self, user_id: i64) -> Result<Option<User>>;
}

/// Yields all expense records belonging to a user
pub trait ExpenseStore {
    fn expenses_for_user(&self, user_id: i64) -> Result<Vec<Expense>>;
}

/// Yields the static category list in registry order
pub trait CategoryRegistry {
    fn categories(&self) -> Result<Vec<Category>>;
}

impl UserDirectory for Database {
    fn user(&self, user_id: i64) -> Result<Option<User>> {
        self.get_user(user_id)
    }
}

impl ExpenseStore for Database {
    fn expenses_for_user(&self, user_id: i64) -> Result<Vec<Expense>> {
        self.list_expenses_for_user(user_id)
    }
}

impl CategoryRegistry for Database {
    fn categories(&self) -> Result<Vec<Category>> {
        self.list_categories()
    }
}

/// A fixed registry held in memory
impl CategoryRegistry for [Category] {
    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.to_vec())
    }
}

impl CategoryRegistry for Vec<Category> {
    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.clone())
    }
}

/// A flat list of expenses for any number of users
impl ExpenseStore for [Expense] {
    fn expenses_for_user(&self, user_id: i64) -> Result<Vec<Expense>> {
        Ok(self
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

impl ExpenseStore for Vec<Expense> {
    fn expenses_for_user(&self, user_id: i64) -> Result<Vec<Expense>> {
        self.as_slice().expenses_for_user(user_id)
    }
}

//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Database setup (init, reset) and shared utilities (open_db)
//! - `dashboard` - Dashboard and insights
//! - `expenses` - Expense commands (list, add, delete)
//! - `registry` - Category and user listings
//! - `serve` - Web server command

pub mod core;
pub mod dashboard;
pub mod expenses;
pub mod registry;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use dashboard::*;
pub use expenses::*;
pub use registry::*;
pub use serve::*;

use anyhow::Result;
use tally_core::db::Database;
use tally_core::insights::{format::money, DEFAULT_CURRENCY_SYMBOL};
use tally_core::models::User;

/// Truncate a string to max length (char-aware), adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount with the default currency symbol
pub fn fmt_money(amount: f64) -> String {
    money(DEFAULT_CURRENCY_SYMBOL, amount)
}

/// Resolve a username or fail with a readable error
pub fn find_user(db: &Database, username: &str) -> Result<User> {
    db.get_user_by_username(username)?
        .ok_or_else(|| anyhow::anyhow!("User not found: {}", username))
}

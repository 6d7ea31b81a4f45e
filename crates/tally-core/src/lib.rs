//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Domain models (users, expenses, categories)
//! - SQLite store with connection pooling and demo seed data
//! - Store traits so aggregation is decoupled from storage
//! - Dashboard aggregation (totals, category breakdown, budget metrics)
//! - Rule-based insight engine

pub mod dashboard;
pub mod db;
pub mod error;
pub mod insights;
pub mod models;
pub mod store;

pub use dashboard::{
    category_stats, compute_dashboard, CategoryBreakdownEntry, CategoryStats, Dashboard,
    DashboardResult,
};
pub use db::Database;
pub use error::{Error, Result};
pub use insights::{Insight, InsightEngine, InsightKind, InsightRule, RuleId};
pub use store::{CategoryRegistry, ExpenseStore, UserDirectory};

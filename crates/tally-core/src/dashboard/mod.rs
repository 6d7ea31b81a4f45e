//! Dashboard aggregation
//!
//! Turns a user's expense list into totals, a per-category breakdown,
//! budget metrics, and insights. The aggregation functions are pure; the
//! [`Dashboard`] service only adds fetching from the injected stores.
//!
//! ```rust,ignore
//! use tally_core::dashboard::Dashboard;
//!
//! let dashboard = Dashboard::new(&db, &db);
//! let result = dashboard.build(&user)?;
//! ```

pub mod aggregator;
pub mod types;

pub use aggregator::{
    category_breakdown, category_stats, compute_dashboard, compute_dashboard_with, percent_of,
    round1, total_spent, EMERGENCY_FUND_MONTHS,
};
pub use types::{CategoryBreakdownEntry, CategoryStats, DashboardResult};

use std::sync::OnceLock;

use crate::error::Result;
use crate::insights::InsightEngine;
use crate::models::User;
use crate::store::{CategoryRegistry, ExpenseStore};

/// Shared engine with the built-in rules
fn default_engine() -> &'static InsightEngine {
    static ENGINE: OnceLock<InsightEngine> = OnceLock::new();
    ENGINE.get_or_init(InsightEngine::new)
}

/// Builds dashboards from an expense store and a category registry
pub struct Dashboard<'a, S: ?Sized, C: ?Sized> {
    expenses: &'a S,
    categories: &'a C,
    engine: &'a InsightEngine,
}

impl<'a, S, C> Dashboard<'a, S, C>
where
    S: ExpenseStore + ?Sized,
    C: CategoryRegistry + ?Sized,
{
    /// Create a dashboard service with the default insight rules
    pub fn new(expenses: &'a S, categories: &'a C) -> Self {
        Self::with_engine(expenses, categories, default_engine())
    }

    /// Create a dashboard service with a custom insight engine
    pub fn with_engine(expenses: &'a S, categories: &'a C, engine: &'a InsightEngine) -> Self {
        Self {
            expenses,
            categories,
            engine,
        }
    }

    /// Build the full dashboard for a user
    ///
    /// The caller is responsible for resolving the user (and reporting a
    /// missing one) before calling this.
    pub fn build(&self, user: &User) -> Result<DashboardResult> {
        let expenses = self.expenses.expenses_for_user(user.id)?;
        let categories = self.categories.categories()?;

        Ok(compute_dashboard_with(
            self.engine,
            user.id,
            user.income,
            &expenses,
            &categories,
        ))
    }

    /// Per-category grouping with the raw expense records
    pub fn stats(&self, user_id: i64) -> Result<Vec<CategoryStats>> {
        let expenses = self.expenses.expenses_for_user(user_id)?;
        let categories = self.categories.categories()?;

        Ok(category_stats(&expenses, &categories))
    }
}

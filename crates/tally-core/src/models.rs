//! Domain models for Tally

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Icon used for expenses whose category is not in the registry
pub const FALLBACK_EXPENSE_ICON: &str = "💰";

/// A registered user. The password never leaves the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    /// Monthly income
    pub income: f64,
    pub created_at: DateTime<Utc>,
}

/// Registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub income: f64,
}

/// A single spending record owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    /// Must match a category name for the expense to show up in the breakdown
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub icon: String,
}

/// Payload for recording a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub user_id: i64,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Reject non-positive amounts and blank text fields
    pub fn validate(&self) -> crate::Result<()> {
        if self.category.trim().is_empty() || self.description.trim().is_empty() {
            return Err(crate::Error::InvalidData(
                "Category and description are required".to_string(),
            ));
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(crate::Error::InvalidData(
                "Amount must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update for an expense; `None` fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseUpdate {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

/// A spending category from the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key, matched case-sensitively against `Expense::category`
    pub name: String,
    pub icon: String,
    /// Hex color, e.g. "#ef4444"
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// The default category registry, in display order
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Food", "🍔", "#ef4444"),
        Category::new("Transport", "🚕", "#3b82f6"),
        Category::new("Shopping", "🛒", "#8b5cf6"),
        Category::new("Bills", "💡", "#f59e0b"),
        Category::new("Entertainment", "🎬", "#ec4899"),
        Category::new("Health", "🏥", "#10b981"),
    ]
}

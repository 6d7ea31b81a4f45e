//! Derived dashboard values. None of these are stored.

use serde::{Deserialize, Serialize};

use crate::insights::Insight;
use crate::models::Expense;

/// Spending for one category. Only categories with a non-zero amount appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownEntry {
    pub category: String,
    pub icon: String,
    pub color: String,
    pub amount: f64,
    /// Share of total spend, rounded to one decimal
    pub percentage: f64,
    pub transaction_count: usize,
}

/// A category with the raw expenses that fall into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: String,
    pub icon: String,
    pub color: String,
    pub total: f64,
    pub count: usize,
    pub expenses: Vec<Expense>,
}

/// Everything the dashboard shows for one user, built fresh per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResult {
    #[serde(skip)]
    pub user_id: i64,
    pub income: f64,
    pub total_spent: f64,
    /// `income - total_spent`, negative when overspent
    pub budget_left: f64,
    pub savings_rate: f64,
    #[serde(rename = "emergencyFund")]
    pub emergency_fund_target: f64,
    pub category_breakdown: Vec<CategoryBreakdownEntry>,
    pub insights: Vec<Insight>,
    pub total_expenses: usize,
}

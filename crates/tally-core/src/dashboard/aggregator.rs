//! Folds a user's expenses against the category registry

use crate::insights::InsightEngine;
use crate::models::{Category, Expense};

use super::types::{CategoryBreakdownEntry, CategoryStats, DashboardResult};

/// Months of income the emergency fund should cover
pub const EMERGENCY_FUND_MONTHS: f64 = 6.0;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of `part` in `whole`, rounded to one decimal; 0 when `whole` is not positive
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round1(part / whole * 100.0)
    } else {
        0.0
    }
}

/// Sum of all expense amounts
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category totals, largest first
///
/// Categories with no spend are dropped. Equal amounts keep registry order.
pub fn category_breakdown(
    expenses: &[Expense],
    categories: &[Category],
) -> Vec<CategoryBreakdownEntry> {
    let total = total_spent(expenses);

    let mut entries: Vec<CategoryBreakdownEntry> = categories
        .iter()
        .map(|cat| {
            let (amount, count) = expenses
                .iter()
                .filter(|e| e.category == cat.name)
                .fold((0.0, 0), |(sum, n), e| (sum + e.amount, n + 1));

            CategoryBreakdownEntry {
                category: cat.name.clone(),
                icon: cat.icon.clone(),
                color: cat.color.clone(),
                amount,
                percentage: percent_of(amount, total),
                transaction_count: count,
            }
        })
        .filter(|entry| entry.amount != 0.0)
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    entries
}

/// Group expenses by category in registry order, keeping the raw records
///
/// Only categories with at least one expense are returned. No sorting.
pub fn category_stats(expenses: &[Expense], categories: &[Category]) -> Vec<CategoryStats> {
    categories
        .iter()
        .map(|cat| {
            let matching: Vec<Expense> = expenses
                .iter()
                .filter(|e| e.category == cat.name)
                .cloned()
                .collect();

            CategoryStats {
                category: cat.name.clone(),
                icon: cat.icon.clone(),
                color: cat.color.clone(),
                total: total_spent(&matching),
                count: matching.len(),
                expenses: matching,
            }
        })
        .filter(|stats| stats.count > 0)
        .collect()
}

/// Compute the dashboard with the default insight rules
pub fn compute_dashboard(
    user_id: i64,
    income: f64,
    expenses: &[Expense],
    categories: &[Category],
) -> DashboardResult {
    compute_dashboard_with(&InsightEngine::new(), user_id, income, expenses, categories)
}

/// Compute the dashboard using a specific insight engine
pub fn compute_dashboard_with(
    engine: &InsightEngine,
    user_id: i64,
    income: f64,
    expenses: &[Expense],
    categories: &[Category],
) -> DashboardResult {
    let total_spent = total_spent(expenses);
    let category_breakdown = category_breakdown(expenses, categories);

    let budget_left = income - total_spent;
    let savings_rate = percent_of(budget_left, income);
    let emergency_fund_target = income * EMERGENCY_FUND_MONTHS;

    let insights = engine.generate(&category_breakdown, total_spent, income);

    tracing::debug!(
        user_id,
        total_spent,
        categories = category_breakdown.len(),
        insights = insights.len(),
        "Dashboard computed"
    );

    DashboardResult {
        user_id,
        income,
        total_spent,
        budget_left,
        savings_rate,
        emergency_fund_target,
        category_breakdown,
        insights,
        total_expenses: expenses.len(),
    }
}

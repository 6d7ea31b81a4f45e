//! High Spending rule
//!
//! Looks only at the largest category. If it takes more than 30% of total
//! spend, warn and suggest cutting it by 10%.

use super::engine::{InsightContext, InsightRule};
use super::types::{Insight, InsightKind, RuleId};

/// Share of total spend (percent) above which the top category is flagged
pub const HIGH_SPENDING_THRESHOLD_PCT: f64 = 30.0;

/// Suggested reduction as a fraction of the category amount
pub const SUGGESTED_REDUCTION: f64 = 0.1;

/// Category that gets meal-prep advice instead of the generic suggestion
const FOOD_CATEGORY: &str = "Food";

pub struct HighSpendingRule;

impl HighSpendingRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighSpendingRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for HighSpendingRule {
    fn id(&self) -> RuleId {
        RuleId::HighSpending
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<Insight> {
        let highest = ctx.breakdown.first()?;
        if highest.percentage <= HIGH_SPENDING_THRESHOLD_PCT {
            return None;
        }

        let saving = (highest.amount * SUGGESTED_REDUCTION).round();

        let suggestion = if highest.category == FOOD_CATEGORY {
            "Try meal prepping on weekends and limit food delivery to twice a week.".to_string()
        } else {
            format!("Set a monthly budget limit for {}.", highest.category)
        };

        Some(Insight::new(
            InsightKind::Warning,
            "⚠️",
            "High Spending Alert",
            format!(
                "You are spending {}% ({}) on {}. Consider reducing by 10% to save {}/month.",
                highest.percentage,
                ctx.money(highest.amount),
                highest.category,
                ctx.money(saving),
            ),
            suggestion,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::CategoryBreakdownEntry;

    fn entry(category: &str, amount: f64, percentage: f64) -> CategoryBreakdownEntry {
        CategoryBreakdownEntry {
            category: category.to_string(),
            icon: "💰".to_string(),
            color: "#000000".to_string(),
            amount,
            percentage,
            transaction_count: 2,
        }
    }

    #[test]
    fn test_no_breakdown_no_insight() {
        let ctx = InsightContext::new(&[], 0.0, 1000.0);
        assert!(HighSpendingRule::new().evaluate(&ctx).is_none());
    }

    #[test]
    fn test_at_threshold_does_not_fire() {
        let breakdown = vec![entry("Bills", 300.0, 30.0), entry("Food", 200.0, 20.0)];
        let ctx = InsightContext::new(&breakdown, 1000.0, 5000.0);
        assert!(HighSpendingRule::new().evaluate(&ctx).is_none());
    }

    #[test]
    fn test_below_threshold_demo_food() {
        let breakdown = vec![entry("Food", 5550.0, 28.9)];
        let ctx = InsightContext::new(&breakdown, 19199.0, 60000.0);
        assert!(HighSpendingRule::new().evaluate(&ctx).is_none());
    }

    #[test]
    fn test_generic_suggestion_for_non_food() {
        let breakdown = vec![entry("Shopping", 3500.0, 100.0)];
        let ctx = InsightContext::new(&breakdown, 3500.0, 60000.0);
        let insight = HighSpendingRule::new().evaluate(&ctx).unwrap();

        assert_eq!(insight.kind, InsightKind::Warning);
        assert_eq!(insight.title, "High Spending Alert");
        assert_eq!(
            insight.message,
            "You are spending 100% (₹3,500) on Shopping. Consider reducing by 10% to save ₹350/month."
        );
        assert_eq!(insight.suggestion, "Set a monthly budget limit for Shopping.");
    }

    #[test]
    fn test_food_gets_meal_prep_advice() {
        let breakdown = vec![entry("Food", 4125.0, 41.3)];
        let ctx = InsightContext::new(&breakdown, 10000.0, 20000.0);
        let insight = HighSpendingRule::new().evaluate(&ctx).unwrap();

        assert!(insight.message.contains("41.3%"));
        // 412.5 rounds up
        assert!(insight.message.contains("save ₹413/month"));
        assert!(insight.suggestion.starts_with("Try meal prepping"));
    }

    #[test]
    fn test_only_first_entry_is_considered() {
        let breakdown = vec![entry("Bills", 500.0, 25.0), entry("Food", 900.0, 45.0)];
        let ctx = InsightContext::new(&breakdown, 2000.0, 5000.0);
        assert!(HighSpendingRule::new().evaluate(&ctx).is_none());
    }
}

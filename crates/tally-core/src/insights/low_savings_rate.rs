//! Low Savings Rate rule
//!
//! Compares the numeric savings rate (one decimal) against 20%. Users with
//! no recorded income have no meaningful rate and are skipped, so a user
//! with zero income and no expenses sees only the emergency fund reminder.

use super::engine::{InsightContext, InsightRule};
use super::types::{Insight, InsightKind, RuleId};

/// Minimum recommended savings rate, in percent
pub const MIN_SAVINGS_RATE_PCT: f64 = 20.0;

pub struct LowSavingsRateRule;

impl LowSavingsRateRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LowSavingsRateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for LowSavingsRateRule {
    fn id(&self) -> RuleId {
        RuleId::LowSavingsRate
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<Insight> {
        if ctx.income <= 0.0 {
            return None;
        }

        let rate = ctx.savings_rate();
        if rate >= MIN_SAVINGS_RATE_PCT {
            return None;
        }

        Some(Insight::new(
            InsightKind::Warning,
            "🎯",
            "Low Savings Rate",
            format!(
                "Your savings rate is {:.1}%. Financial experts recommend saving at least 20% of your income.",
                rate
            ),
            "Review your expenses and identify areas where you can cut back.",
        ))
    }
}

//! Investment Opportunity rule
//!
//! When more than 5000 of income is left after spending, suggest a monthly
//! investment of 30% of the remainder, capped at 5000.

use super::engine::{InsightContext, InsightRule};
use super::types::{Insight, InsightKind, RuleId};

/// Budget left (currency units) above which investing is suggested
pub const INVESTMENT_THRESHOLD: f64 = 5000.0;

/// Upper bound on the suggested monthly investment
pub const MAX_MONTHLY_INVESTMENT: f64 = 5000.0;

/// Fraction of the remaining budget to invest
pub const INVESTMENT_SHARE: f64 = 0.3;

/// Suggested recurring investment for a given remaining budget
pub fn suggested_investment(budget_left: f64) -> f64 {
    (budget_left * INVESTMENT_SHARE)
        .floor()
        .min(MAX_MONTHLY_INVESTMENT)
}

pub struct InvestmentOpportunityRule;

impl InvestmentOpportunityRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvestmentOpportunityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for InvestmentOpportunityRule {
    fn id(&self) -> RuleId {
        RuleId::InvestmentOpportunity
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<Insight> {
        let budget_left = ctx.budget_left();
        if budget_left <= INVESTMENT_THRESHOLD {
            return None;
        }

        let amount = suggested_investment(budget_left);

        Some(Insight::new(
            InsightKind::Success,
            "📈",
            "Investment Opportunity",
            format!("You have {} left this month.", ctx.money(budget_left)),
            format!(
                "Consider starting a SIP of {}/month in an Index Fund or ELSS for long-term wealth building.",
                ctx.money(amount)
            ),
        ))
    }
}

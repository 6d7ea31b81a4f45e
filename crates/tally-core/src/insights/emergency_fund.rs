//! Emergency Fund rule. Always emitted, even with no income.

use crate::dashboard::EMERGENCY_FUND_MONTHS;

use super::engine::{InsightContext, InsightRule};
use super::types::{Insight, InsightKind, RuleId};

pub struct EmergencyFundRule;

impl EmergencyFundRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmergencyFundRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for EmergencyFundRule {
    fn id(&self) -> RuleId {
        RuleId::EmergencyFund
    }

    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<Insight> {
        let target = ctx.income * EMERGENCY_FUND_MONTHS;

        Some(Insight::new(
            InsightKind::Info,
            "💰",
            "Emergency Fund Target",
            format!(
                "Build an emergency fund of {} (6 months of income).",
                ctx.money(target)
            ),
            "Save 10-15% of your monthly income towards this goal.",
        ))
    }
}

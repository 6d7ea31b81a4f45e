//! Insight Engine - evaluates the rule chain in declared order

use crate::dashboard::{percent_of, CategoryBreakdownEntry};

use super::types::{Insight, RuleId};
use super::{EmergencyFundRule, HighSpendingRule, InvestmentOpportunityRule, LowSavingsRateRule};

/// Currency symbol used in insight text unless overridden
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Inputs shared by every rule
pub struct InsightContext<'a> {
    /// Breakdown sorted by amount, largest first
    pub breakdown: &'a [CategoryBreakdownEntry],
    pub total_spent: f64,
    pub income: f64,
    /// Symbol prefixed to amounts in messages
    pub currency_symbol: &'a str,
}

impl<'a> InsightContext<'a> {
    pub fn new(breakdown: &'a [CategoryBreakdownEntry], total_spent: f64, income: f64) -> Self {
        Self {
            breakdown,
            total_spent,
            income,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL,
        }
    }

    /// Income left after all spending (negative when overspent)
    pub fn budget_left(&self) -> f64 {
        self.income - self.total_spent
    }

    /// Budget left as a percentage of income, one decimal; 0 without income
    pub fn savings_rate(&self) -> f64 {
        percent_of(self.budget_left(), self.income)
    }

    /// Format an amount for message text
    pub fn money(&self, amount: f64) -> String {
        super::format::money(self.currency_symbol, amount)
    }
}

/// A single predicate -> insight step in the chain
pub trait InsightRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> RuleId;

    /// Produce an insight if the rule applies
    fn evaluate(&self, ctx: &InsightContext<'_>) -> Option<Insight>;
}

/// Evaluates registered rules in order and collects what they emit
///
/// This is a chain, not a priority queue: output order is registration
/// order and no rule suppresses another.
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
    currency_symbol: String,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules in their fixed order
    pub fn new() -> Self {
        let mut engine = Self::empty();

        // Register built-in rules
        engine.register(Box::new(HighSpendingRule::new()));
        engine.register(Box::new(InvestmentOpportunityRule::new()));
        engine.register(Box::new(EmergencyFundRule::new()));
        engine.register(Box::new(LowSavingsRateRule::new()));

        engine
    }

    /// Create an engine with no rules
    pub fn empty() -> Self {
        Self {
            rules: vec![],
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Use a different currency symbol in messages
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Append a rule to the end of the chain
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule against the aggregate
    pub fn generate(
        &self,
        breakdown: &[CategoryBreakdownEntry],
        total_spent: f64,
        income: f64,
    ) -> Vec<Insight> {
        let ctx = InsightContext {
            currency_symbol: &self.currency_symbol,
            ..InsightContext::new(breakdown, total_spent, income)
        };
        self.evaluate(&ctx)
    }

    /// Run every rule against a prepared context
    pub fn evaluate(&self, ctx: &InsightContext<'_>) -> Vec<Insight> {
        let mut insights = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            if let Some(insight) = rule.evaluate(ctx) {
                tracing::trace!(rule = rule.id().as_str(), kind = %insight.kind, "Insight emitted");
                insights.push(insight);
            }
        }

        insights
    }

    /// Registered rules in evaluation order
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

//! Insight Engine - rule-based financial observations
//!
//! Consumes the dashboard aggregate and produces an ordered list of
//! advisory messages. Each rule is an independent predicate/builder pair;
//! the engine evaluates them in registration order.
//!
//! ## Built-in Rules (in order)
//!
//! - **High Spending** - top category above 30% of spend
//! - **Investment Opportunity** - more than 5000 left over
//! - **Emergency Fund** - always present
//! - **Low Savings Rate** - savings rate under 20%
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let insights = engine.generate(&breakdown, total_spent, income);
//! ```

pub mod emergency_fund;
pub mod engine;
pub mod format;
pub mod high_spending;
pub mod investment_opportunity;
pub mod low_savings_rate;
pub mod types;

pub use emergency_fund::EmergencyFundRule;
pub use engine::{InsightContext, InsightEngine, InsightRule, DEFAULT_CURRENCY_SYMBOL};
pub use high_spending::HighSpendingRule;
pub use investment_opportunity::InvestmentOpportunityRule;
pub use low_savings_rate::LowSavingsRateRule;
pub use types::{Insight, InsightKind, RuleId};

//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a built-in insight rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Largest category takes too big a share of spend
    HighSpending,
    /// Enough budget left over to invest
    InvestmentOpportunity,
    /// Emergency fund target reminder
    EmergencyFund,
    /// Savings rate below the recommended minimum
    LowSavingsRate,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::HighSpending => "high_spending",
            RuleId::InvestmentOpportunity => "investment_opportunity",
            RuleId::EmergencyFund => "emergency_fund",
            RuleId::LowSavingsRate => "low_savings_rate",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tone of an insight, used by the front end for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Success => "success",
            InsightKind::Info => "info",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A human-readable financial observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub icon: String,
    pub title: String,
    pub message: String,
    pub suggestion: String,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        icon: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            icon: icon.into(),
            title: title.into(),
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

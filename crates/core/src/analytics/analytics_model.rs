use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total spend for one expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Total spend for one calendar bucket (`YYYY-MM` or `YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotal {
    pub period: String,
    pub total: Decimal,
}

/// Derived overview of a user's ledger; recomputed on demand, never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub savings_rate: Decimal,
    pub budget_used_percent: Decimal,
}

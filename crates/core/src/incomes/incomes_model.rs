use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model for a single income entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub amount: Decimal,
    pub source: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording new income
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncome {
    pub amount: Decimal,
    pub source: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl NewIncome {
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income amount cannot be negative".to_string(),
            )));
        }
        if self.source.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income source cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for replacing an existing income entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpdate {
    pub id: String,
    pub amount: Decimal,
    pub source: String,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl IncomeUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income amount cannot be negative".to_string(),
            )));
        }
        if self.source.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Income source cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

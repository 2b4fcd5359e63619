use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::goal_progress_percent;
use crate::errors::{Error, Result, ValidationError};

/// Domain model for a personal savings goal.
///
/// Whether the goal is achieved is derived from the amounts on read and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn progress_percent(&self) -> Decimal {
        goal_progress_percent(self.current_amount, self.target_amount)
    }
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default)]
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal name cannot be empty".to_string(),
            )));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal target amount must be positive".to_string(),
            )));
        }
        if self.current_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal current amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for replacing an existing goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
}

impl GoalUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal target amount must be positive".to_string(),
            )));
        }
        if self.current_amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal current amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::goal_progress_percent;
use crate::errors::{Error, Result, ValidationError};

/// Domain model for a household member with a spendable balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input model for adding a household member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFamilyMember {
    pub name: String,
    #[serde(default)]
    pub balance: Decimal,
}

impl NewFamilyMember {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Member name cannot be empty".to_string(),
            )));
        }
        if self.balance < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Member balance cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Lifecycle of a household task.
///
/// `Open -> Done -> Approved`, one-way. Approval is the only transition
/// that credits the assigned member's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Open,
    Done,
    Approved,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Open => "open",
            TaskStatus::Done => "done",
            TaskStatus::Approved => "approved",
        };
        write!(f, "{}", label)
    }
}

/// Domain model for a rewarded household task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyTask {
    pub id: String,
    pub title: String,
    pub assigned_to: String,
    pub reward: Decimal,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a household task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFamilyTask {
    pub title: String,
    pub assigned_to: String,
    pub reward: Decimal,
}

impl NewFamilyTask {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Task title cannot be empty".to_string(),
            )));
        }
        if self.assigned_to.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "assignedTo".to_string(),
            )));
        }
        if self.reward <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Task reward must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// Domain model for a shared household goal.
///
/// Achievement is derived from the amounts on read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl FamilyGoal {
    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn progress_percent(&self) -> Decimal {
        goal_progress_percent(self.current_amount, self.target_amount)
    }
}

/// Input model for creating a shared household goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFamilyGoal {
    pub name: String,
    pub target_amount: Decimal,
}

impl NewFamilyGoal {
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
        Ok(())
    }
}

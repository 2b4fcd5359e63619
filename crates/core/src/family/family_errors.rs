use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for family ledger operations
#[derive(Debug, Error)]
pub enum FamilyError {
    #[error("Member '{member_id}' has balance {balance}, needs {required}")]
    InsufficientBalance {
        member_id: String,
        balance: Decimal,
        required: Decimal,
    },

    #[error("Task '{task_id}' is '{current}', cannot transition to '{requested}'")]
    InvalidTransition {
        task_id: String,
        current: String,
        requested: String,
    },
}

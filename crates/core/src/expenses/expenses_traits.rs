use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};

/// Trait for expense repository operations
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn load_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    fn insert_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    fn update_expense(&self, user_id: &str, expense_update: ExpenseUpdate) -> Result<Expense>;
    fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
pub trait ExpenseServiceTrait: Send + Sync {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>>;
    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense>;
    fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;
    fn update_expense(&self, user_id: &str, expense_update: ExpenseUpdate) -> Result<Expense>;
    fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
    fn get_recent_expenses(&self, user_id: &str, limit: usize) -> Result<Vec<Expense>>;
    fn get_expenses_by_category(&self, user_id: &str, category: &str) -> Result<Vec<Expense>>;
}

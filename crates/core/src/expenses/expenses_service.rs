use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};

/// Service for logging and querying expenses
pub struct ExpenseService {
    expense_repo: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(expense_repo: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { expense_repo }
    }
}

impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.expense_repo.load_expenses(user_id)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.expense_repo.get_expense(user_id, expense_id)
    }

    fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        debug!(
            "Creating expense for user {}: {} {}",
            user_id, new_expense.category, new_expense.amount
        );
        new_expense.validate()?;
        self.expense_repo.insert_expense(user_id, new_expense)
    }

    fn update_expense(&self, user_id: &str, expense_update: ExpenseUpdate) -> Result<Expense> {
        expense_update.validate()?;
        self.expense_repo.update_expense(user_id, expense_update)
    }

    fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        self.expense_repo.delete_expense(user_id, expense_id)
    }

    fn get_recent_expenses(&self, user_id: &str, limit: usize) -> Result<Vec<Expense>> {
        let expenses = self.expense_repo.load_expenses(user_id)?;
        Ok(crate::analytics::recent_expenses(&expenses, limit))
    }

    fn get_expenses_by_category(&self, user_id: &str, category: &str) -> Result<Vec<Expense>> {
        Ok(self
            .expense_repo
            .load_expenses(user_id)?
            .into_iter()
            .filter(|expense| expense.category == category)
            .collect())
    }
}

use chrono::Utc;
use uuid::Uuid;

use crate::constants::EXPENSES_KEY_PREFIX;
use crate::errors::{Error, Result};
use crate::expenses::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use crate::expenses::expenses_traits::ExpenseRepositoryTrait;
use crate::store::LedgerStore;

pub struct ExpenseRepository {
    store: LedgerStore,
}

impl ExpenseRepository {
    pub fn new(store: LedgerStore) -> Self {
        ExpenseRepository { store }
    }

    fn key(user_id: &str) -> String {
        LedgerStore::user_key(EXPENSES_KEY_PREFIX, user_id)
    }
}

impl ExpenseRepositoryTrait for ExpenseRepository {
    fn load_expenses(&self, user_id: &str) -> Result<Vec<Expense>> {
        self.store.get_collection(&Self::key(user_id))
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.load_expenses(user_id)?
            .into_iter()
            .find(|expense| expense.id == expense_id)
            .ok_or_else(|| Error::NotFound(format!("Expense '{}'", expense_id)))
    }

    fn insert_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let key = Self::key(user_id);
        let mut expenses: Vec<Expense> = self.store.get_collection(&key)?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            amount: new_expense.amount,
            category: new_expense.category,
            date: new_expense.date,
            note: new_expense.note,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };

        expenses.push(expense.clone());
        self.store.put_collection(&key, &expenses)?;
        Ok(expense)
    }

    fn update_expense(&self, user_id: &str, expense_update: ExpenseUpdate) -> Result<Expense> {
        let key = Self::key(user_id);
        let mut expenses: Vec<Expense> = self.store.get_collection(&key)?;

        let existing = expenses
            .iter_mut()
            .find(|expense| expense.id == expense_update.id)
            .ok_or_else(|| Error::NotFound(format!("Expense '{}'", expense_update.id)))?;

        existing.amount = expense_update.amount;
        existing.category = expense_update.category;
        existing.date = expense_update.date;
        existing.note = expense_update.note;
        let updated = existing.clone();

        self.store.put_collection(&key, &expenses)?;
        Ok(updated)
    }

    fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let key = Self::key(user_id);
        let mut expenses: Vec<Expense> = self.store.get_collection(&key)?;

        let before = expenses.len();
        expenses.retain(|expense| expense.id != expense_id);
        let removed = before - expenses.len();

        // Unknown id is a no-op; nothing to rewrite.
        if removed > 0 {
            self.store.put_collection(&key, &expenses)?;
        }
        Ok(removed)
    }
}

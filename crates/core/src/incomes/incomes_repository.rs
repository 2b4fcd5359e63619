use chrono::Utc;
use uuid::Uuid;

use crate::constants::INCOMES_KEY_PREFIX;
use crate::errors::{Error, Result};
use crate::incomes::incomes_model::{Income, IncomeUpdate, NewIncome};
use crate::incomes::incomes_traits::IncomeRepositoryTrait;
use crate::store::LedgerStore;

pub struct IncomeRepository {
    store: LedgerStore,
}

impl IncomeRepository {
    pub fn new(store: LedgerStore) -> Self {
        IncomeRepository { store }
    }

    fn key(user_id: &str) -> String {
        LedgerStore::user_key(INCOMES_KEY_PREFIX, user_id)
    }
}

impl IncomeRepositoryTrait for IncomeRepository {
    fn load_incomes(&self, user_id: &str) -> Result<Vec<Income>> {
        self.store.get_collection(&Self::key(user_id))
    }

    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income> {
        self.load_incomes(user_id)?
            .into_iter()
            .find(|income| income.id == income_id)
            .ok_or_else(|| Error::NotFound(format!("Income '{}'", income_id)))
    }

    fn insert_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income> {
        let key = Self::key(user_id);
        let mut incomes: Vec<Income> = self.store.get_collection(&key)?;

        let income = Income {
            id: Uuid::new_v4().to_string(),
            amount: new_income.amount,
            source: new_income.source,
            date: new_income.date,
            note: new_income.note,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };

        incomes.push(income.clone());
        self.store.put_collection(&key, &incomes)?;
        Ok(income)
    }

    fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income> {
        let key = Self::key(user_id);
        let mut incomes: Vec<Income> = self.store.get_collection(&key)?;

        let existing = incomes
            .iter_mut()
            .find(|income| income.id == income_update.id)
            .ok_or_else(|| Error::NotFound(format!("Income '{}'", income_update.id)))?;

        existing.amount = income_update.amount;
        existing.source = income_update.source;
        existing.date = income_update.date;
        existing.note = income_update.note;
        let updated = existing.clone();

        self.store.put_collection(&key, &incomes)?;
        Ok(updated)
    }

    fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize> {
        let key = Self::key(user_id);
        let mut incomes: Vec<Income> = self.store.get_collection(&key)?;

        let before = incomes.len();
        incomes.retain(|income| income.id != income_id);
        let removed = before - incomes.len();

        if removed > 0 {
            self.store.put_collection(&key, &incomes)?;
        }
        Ok(removed)
    }
}

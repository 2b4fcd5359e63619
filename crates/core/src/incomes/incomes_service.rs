use std::sync::Arc;

use log::debug;

use crate::errors::Result;
use crate::incomes::incomes_model::{Income, IncomeUpdate, NewIncome};
use crate::incomes::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};

/// Service for recording and querying income entries
pub struct IncomeService {
    income_repo: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(income_repo: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { income_repo }
    }
}

impl IncomeServiceTrait for IncomeService {
    fn get_incomes(&self, user_id: &str) -> Result<Vec<Income>> {
        self.income_repo.load_incomes(user_id)
    }

    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income> {
        self.income_repo.get_income(user_id, income_id)
    }

    fn create_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income> {
        debug!(
            "Recording income for user {}: {} {}",
            user_id, new_income.source, new_income.amount
        );
        new_income.validate()?;
        self.income_repo.insert_income(user_id, new_income)
    }

    fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income> {
        income_update.validate()?;
        self.income_repo.update_income(user_id, income_update)
    }

    fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize> {
        self.income_repo.delete_income(user_id, income_id)
    }
}

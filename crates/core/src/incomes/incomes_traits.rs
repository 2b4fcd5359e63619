use crate::errors::Result;
use crate::incomes::incomes_model::{Income, IncomeUpdate, NewIncome};

/// Trait for income repository operations
pub trait IncomeRepositoryTrait: Send + Sync {
    fn load_incomes(&self, user_id: &str) -> Result<Vec<Income>>;
    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income>;
    fn insert_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income>;
    fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income>;
    fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize>;
}

/// Trait for income service operations
pub trait IncomeServiceTrait: Send + Sync {
    fn get_incomes(&self, user_id: &str) -> Result<Vec<Income>>;
    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income>;
    fn create_income(&self, user_id: &str, new_income: NewIncome) -> Result<Income>;
    fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income>;
    fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize>;
}

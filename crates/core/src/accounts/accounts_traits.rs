use crate::accounts::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::errors::Result;

/// Trait for account repository operations
pub trait AccountRepositoryTrait: Send + Sync {
    fn load_accounts(&self, user_id: &str) -> Result<Vec<Account>>;
    fn get_account(&self, user_id: &str, account_id: &str) -> Result<Account>;
    fn insert_account(&self, user_id: &str, new_account: NewAccount) -> Result<Account>;
    fn update_account(&self, user_id: &str, account_update: AccountUpdate) -> Result<Account>;
    fn delete_account(&self, user_id: &str, account_id: &str) -> Result<usize>;
}

/// Trait for account service operations
pub trait AccountServiceTrait: Send + Sync {
    fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>>;
    fn get_account(&self, user_id: &str, account_id: &str) -> Result<Account>;
    fn create_account(&self, user_id: &str, new_account: NewAccount) -> Result<Account>;
    fn update_account(&self, user_id: &str, account_update: AccountUpdate) -> Result<Account>;
    fn delete_account(&self, user_id: &str, account_id: &str) -> Result<usize>;
}

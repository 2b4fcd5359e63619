use chrono::Utc;
use uuid::Uuid;

use crate::accounts::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::accounts::accounts_traits::AccountRepositoryTrait;
use crate::constants::ACCOUNTS_KEY_PREFIX;
use crate::errors::{Error, Result};
use crate::store::LedgerStore;

pub struct AccountRepository {
    store: LedgerStore,
}

impl AccountRepository {
    pub fn new(store: LedgerStore) -> Self {
        AccountRepository { store }
    }

    fn key(user_id: &str) -> String {
        LedgerStore::user_key(ACCOUNTS_KEY_PREFIX, user_id)
    }
}

impl AccountRepositoryTrait for AccountRepository {
    fn load_accounts(&self, user_id: &str) -> Result<Vec<Account>> {
        self.store.get_collection(&Self::key(user_id))
    }

    fn get_account(&self, user_id: &str, account_id: &str) -> Result<Account> {
        self.load_accounts(user_id)?
            .into_iter()
            .find(|account| account.id == account_id)
            .ok_or_else(|| Error::NotFound(format!("Account '{}'", account_id)))
    }

    fn insert_account(&self, user_id: &str, new_account: NewAccount) -> Result<Account> {
        let key = Self::key(user_id);
        let mut accounts: Vec<Account> = self.store.get_collection(&key)?;

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4().to_string(),
            name: new_account.name,
            account_type: new_account.account_type,
            balance: new_account.balance,
            currency: new_account.currency,
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        accounts.push(account.clone());
        self.store.put_collection(&key, &accounts)?;
        Ok(account)
    }

    fn update_account(&self, user_id: &str, account_update: AccountUpdate) -> Result<Account> {
        let key = Self::key(user_id);
        let mut accounts: Vec<Account> = self.store.get_collection(&key)?;

        let existing = accounts
            .iter_mut()
            .find(|account| account.id == account_update.id)
            .ok_or_else(|| Error::NotFound(format!("Account '{}'", account_update.id)))?;

        existing.name = account_update.name;
        existing.account_type = account_update.account_type;
        existing.balance = account_update.balance;
        existing.currency = account_update.currency;
        existing.updated_at = Utc::now();
        let updated = existing.clone();

        self.store.put_collection(&key, &accounts)?;
        Ok(updated)
    }

    fn delete_account(&self, user_id: &str, account_id: &str) -> Result<usize> {
        let key = Self::key(user_id);
        let mut accounts: Vec<Account> = self.store.get_collection(&key)?;

        let before = accounts.len();
        accounts.retain(|account| account.id != account_id);
        let removed = before - accounts.len();

        if removed > 0 {
            self.store.put_collection(&key, &accounts)?;
        }
        Ok(removed)
    }
}

use std::sync::Arc;

use log::debug;

use crate::accounts::accounts_model::{Account, AccountUpdate, NewAccount};
use crate::accounts::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::errors::Result;

/// Service for managing linked accounts
pub struct AccountService {
    account_repo: Arc<dyn AccountRepositoryTrait>,
}

impl AccountService {
    pub fn new(account_repo: Arc<dyn AccountRepositoryTrait>) -> Self {
        AccountService { account_repo }
    }
}

impl AccountServiceTrait for AccountService {
    fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>> {
        self.account_repo.load_accounts(user_id)
    }

    fn get_account(&self, user_id: &str, account_id: &str) -> Result<Account> {
        self.account_repo.get_account(user_id, account_id)
    }

    fn create_account(&self, user_id: &str, new_account: NewAccount) -> Result<Account> {
        debug!("Linking account '{}' for user {}", new_account.name, user_id);
        new_account.validate()?;
        self.account_repo.insert_account(user_id, new_account)
    }

    fn update_account(&self, user_id: &str, account_update: AccountUpdate) -> Result<Account> {
        account_update.validate()?;
        self.account_repo.update_account(user_id, account_update)
    }

    fn delete_account(&self, user_id: &str, account_id: &str) -> Result<usize> {
        self.account_repo.delete_account(user_id, account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::accounts_model::AccountType;
    use crate::accounts::accounts_repository::AccountRepository;
    use crate::store::{LedgerStore, MemoryStore};
    use rust_decimal_macros::dec;

    fn make_service() -> AccountService {
        let store = LedgerStore::new(Arc::new(MemoryStore::new()));
        AccountService::new(Arc::new(AccountRepository::new(store)))
    }

    #[test]
    fn test_create_and_update_account() {
        let service = make_service();
        let created = service
            .create_account(
                "u1",
                NewAccount {
                    name: "Everyday Checking".to_string(),
                    account_type: AccountType::Checking,
                    balance: dec!(1200.50),
                    currency: "USD".to_string(),
                },
            )
            .unwrap();
        assert_eq!(created.account_type, AccountType::Checking);

        let updated = service
            .update_account(
                "u1",
                AccountUpdate {
                    id: created.id.clone(),
                    name: "Everyday Checking".to_string(),
                    account_type: AccountType::Checking,
                    balance: dec!(900),
                    currency: "USD".to_string(),
                },
            )
            .unwrap();
        assert_eq!(updated.balance, dec!(900));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let service = make_service();
        let result = service.create_account(
            "u1",
            NewAccount {
                name: " ".to_string(),
                account_type: AccountType::Savings,
                balance: dec!(0),
                currency: "USD".to_string(),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_account() {
        let service = make_service();
        let created = service
            .create_account(
                "u1",
                NewAccount {
                    name: "Emergency Fund".to_string(),
                    account_type: AccountType::Savings,
                    balance: dec!(5000),
                    currency: "USD".to_string(),
                },
            )
            .unwrap();

        assert_eq!(service.delete_account("u1", &created.id).unwrap(), 1);
        assert_eq!(service.delete_account("u1", &created.id).unwrap(), 0);
        assert!(service.get_accounts("u1").unwrap().is_empty());
    }
}

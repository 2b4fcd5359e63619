use crate::auth::auth_model::User;
use crate::auth::auth_traits::UserRepositoryTrait;
use crate::constants::{CURRENT_USER_KEY, USERS_KEY};
use crate::errors::{Error, Result};
use crate::store::LedgerStore;

pub struct UserRepository {
    store: LedgerStore,
}

impl UserRepository {
    pub fn new(store: LedgerStore) -> Self {
        UserRepository { store }
    }
}

impl UserRepositoryTrait for UserRepository {
    fn load_users(&self) -> Result<Vec<User>> {
        self.store.get_collection(USERS_KEY)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .load_users()?
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email)))
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .load_users()?
            .into_iter()
            .find(|user| user.id == user_id))
    }

    fn insert_user(&self, user: User) -> Result<User> {
        let mut users = self.load_users()?;
        users.push(user.clone());
        self.store.put_collection(USERS_KEY, &users)?;
        Ok(user)
    }

    fn update_user(&self, user: User) -> Result<User> {
        let mut users = self.load_users()?;
        let existing = users
            .iter_mut()
            .find(|candidate| candidate.id == user.id)
            .ok_or_else(|| Error::NotFound(format!("User '{}'", user.id)))?;
        *existing = user.clone();
        self.store.put_collection(USERS_KEY, &users)?;
        Ok(user)
    }

    fn get_session(&self) -> Result<Option<User>> {
        self.store.get_object(CURRENT_USER_KEY)
    }

    fn set_session(&self, user: &User) -> Result<()> {
        self.store.put_object(CURRENT_USER_KEY, user)
    }

    fn clear_session(&self) -> Result<()> {
        self.store.delete(CURRENT_USER_KEY)
    }
}

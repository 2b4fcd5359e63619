use std::sync::Arc;

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use crate::auth::auth_errors::AuthError;
use crate::auth::auth_model::{
    validate_email, validate_password, NewUser, User, UserProfile, UserUpdate,
};
use crate::auth::auth_traits::{AuthServiceTrait, UserRepositoryTrait};
use crate::errors::{Error, Result};

/// Service for identity and the persisted session slot
pub struct AuthService {
    user_repo: Arc<dyn UserRepositoryTrait>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepositoryTrait>) -> Self {
        AuthService { user_repo }
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::Auth(AuthError::Hashing(e.to_string())))
    }

    fn verify_password(stored_hash: &str, candidate: &str) -> Result<()> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| Error::Auth(AuthError::Hashing(e.to_string())))?;
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .map_err(|err| match err {
                PasswordHashError::Password => Error::Auth(AuthError::InvalidCredentials),
                other => Error::Auth(AuthError::Hashing(other.to_string())),
            })
    }
}

impl AuthServiceTrait for AuthService {
    fn signup(&self, new_user: NewUser) -> Result<UserProfile> {
        new_user.validate()?;

        let email = new_user.email.trim().to_string();
        if self.user_repo.find_by_email(&email)?.is_some() {
            return Err(Error::Auth(AuthError::EmailTaken(email)));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash: Self::hash_password(&new_user.password)?,
            name: new_user.name.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        debug!("Registering user {}", user.id);
        let user = self.user_repo.insert_user(user)?;
        self.user_repo.set_session(&user)?;
        Ok(user.into())
    }

    fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let user = self
            .user_repo
            .find_by_email(email.trim())?
            .ok_or(Error::Auth(AuthError::InvalidCredentials))?;

        Self::verify_password(&user.password_hash, password)?;

        debug!("User {} logged in", user.id);
        self.user_repo.set_session(&user)?;
        Ok(user.into())
    }

    fn logout(&self) -> Result<()> {
        self.user_repo.clear_session()
    }

    fn current_user(&self) -> Result<Option<UserProfile>> {
        Ok(self.user_repo.get_session()?.map(UserProfile::from))
    }

    fn update_user(&self, update: UserUpdate) -> Result<UserProfile> {
        let session = self
            .user_repo
            .get_session()?
            .ok_or(Error::Auth(AuthError::NotAuthenticated))?;

        // Work from the stored record; the session slot may lag behind.
        let mut user = self
            .user_repo
            .find_by_id(&session.id)?
            .ok_or_else(|| Error::NotFound(format!("User '{}'", session.id)))?;

        if let Some(email) = update.email {
            let email = email.trim().to_string();
            validate_email(&email)?;
            if let Some(owner) = self.user_repo.find_by_email(&email)? {
                if owner.id != user.id {
                    return Err(Error::Auth(AuthError::EmailTaken(email)));
                }
            }
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name.trim().to_string();
        }
        user.updated_at = Utc::now();

        let user = self.user_repo.update_user(user)?;
        self.user_repo.set_session(&user)?;
        Ok(user.into())
    }

    fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        let session = self
            .user_repo
            .get_session()?
            .ok_or(Error::Auth(AuthError::NotAuthenticated))?;

        let mut user = self
            .user_repo
            .find_by_id(&session.id)?
            .ok_or_else(|| Error::NotFound(format!("User '{}'", session.id)))?;

        Self::verify_password(&user.password_hash, current_password)?;
        validate_password(new_password)?;

        user.password_hash = Self::hash_password(new_password)?;
        user.updated_at = Utc::now();

        let user = self.user_repo.update_user(user)?;
        self.user_repo.set_session(&user)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::auth_repository::UserRepository;
    use crate::store::{LedgerStore, MemoryStore};

    fn make_service() -> AuthService {
        let store = LedgerStore::new(Arc::new(MemoryStore::new()));
        AuthService::new(Arc::new(UserRepository::new(store)))
    }

    fn alice() -> NewUser {
        NewUser {
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
            name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_signup_establishes_session() {
        let service = make_service();
        let profile = service.signup(alice()).unwrap();

        let current = service.current_user().unwrap().unwrap();
        assert_eq!(current.id, profile.id);
        assert_eq!(current.email, "alice@example.com");
    }

    #[test]
    fn test_signup_duplicate_email_appends_nothing() {
        let store = LedgerStore::new(Arc::new(MemoryStore::new()));
        let repo = Arc::new(UserRepository::new(store));
        let service = AuthService::new(repo.clone());
        service.signup(alice()).unwrap();

        let duplicate = NewUser {
            email: "ALICE@example.com".to_string(),
            password: "another pass".to_string(),
            name: "Imposter".to_string(),
        };
        let result = service.signup(duplicate);
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::EmailTaken(_)))
        ));
        assert_eq!(repo.load_users().unwrap().len(), 1);
    }

    #[test]
    fn test_password_is_stored_hashed() {
        let store = LedgerStore::new(Arc::new(MemoryStore::new()));
        let repo = Arc::new(UserRepository::new(store));
        let service = AuthService::new(repo.clone());
        service.signup(alice()).unwrap();

        let stored = repo.load_users().unwrap().remove(0);
        assert_ne!(stored.password_hash, "correct horse");
        assert!(stored.password_hash.starts_with("$argon2"));
    }

    #[test]
    fn test_login_succeeds_with_right_password() {
        let service = make_service();
        let profile = service.signup(alice()).unwrap();
        service.logout().unwrap();

        let logged_in = service.login("alice@example.com", "correct horse").unwrap();
        assert_eq!(logged_in.id, profile.id);
        assert!(service.current_user().unwrap().is_some());
    }

    #[test]
    fn test_login_wrong_password_fails() {
        let service = make_service();
        service.signup(alice()).unwrap();
        service.logout().unwrap();

        let result = service.login("alice@example.com", "wrong horse!");
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::InvalidCredentials))
        ));
        assert!(service.current_user().unwrap().is_none());
    }

    #[test]
    fn test_login_unknown_email_fails_identically() {
        let service = make_service();
        let result = service.login("nobody@example.com", "whatever1");
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::InvalidCredentials))
        ));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let service = make_service();
        service.signup(alice()).unwrap();
        service.logout().unwrap();
        service.logout().unwrap();
        assert!(service.current_user().unwrap().is_none());
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let service = make_service();
        let result = service.signup(NewUser {
            email: "bob@example.com".to_string(),
            password: "short".to_string(),
            name: "Bob".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_signup_rejects_invalid_email() {
        let service = make_service();
        for email in ["not-an-email", "@example.com", "bob@nodot"] {
            let result = service.signup(NewUser {
                email: email.to_string(),
                password: "long enough".to_string(),
                name: "Bob".to_string(),
            });
            assert!(result.is_err(), "accepted invalid email {}", email);
        }
    }

    #[test]
    fn test_update_user_merges_into_list_and_session() {
        let store = LedgerStore::new(Arc::new(MemoryStore::new()));
        let repo = Arc::new(UserRepository::new(store));
        let service = AuthService::new(repo.clone());
        service.signup(alice()).unwrap();

        let updated = service
            .update_user(UserUpdate {
                email: None,
                name: Some("Alice B".to_string()),
            })
            .unwrap();
        assert_eq!(updated.name, "Alice B");

        assert_eq!(service.current_user().unwrap().unwrap().name, "Alice B");
        assert_eq!(repo.load_users().unwrap()[0].name, "Alice B");
    }

    #[test]
    fn test_update_user_rejects_taken_email() {
        let service = make_service();
        service.signup(alice()).unwrap();
        service
            .signup(NewUser {
                email: "bob@example.com".to_string(),
                password: "bobs password".to_string(),
                name: "Bob".to_string(),
            })
            .unwrap();

        // Bob holds the session now.
        let result = service.update_user(UserUpdate {
            email: Some("alice@example.com".to_string()),
            name: None,
        });
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::EmailTaken(_)))
        ));
    }

    #[test]
    fn test_change_password() {
        let service = make_service();
        service.signup(alice()).unwrap();

        service
            .change_password("correct horse", "battery staple")
            .unwrap();
        service.logout().unwrap();

        assert!(service.login("alice@example.com", "correct horse").is_err());
        assert!(service
            .login("alice@example.com", "battery staple")
            .is_ok());
    }

    #[test]
    fn test_update_without_session_fails() {
        let service = make_service();
        let result = service.update_user(UserUpdate::default());
        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::NotAuthenticated))
        ));
    }
}

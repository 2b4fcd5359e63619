use crate::auth::auth_model::{NewUser, User, UserProfile, UserUpdate};
use crate::errors::Result;

/// Trait for user-list and session-slot repository operations
pub trait UserRepositoryTrait: Send + Sync {
    fn load_users(&self) -> Result<Vec<User>>;
    /// Case-insensitive email lookup.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn insert_user(&self, user: User) -> Result<User>;
    fn update_user(&self, user: User) -> Result<User>;

    fn get_session(&self) -> Result<Option<User>>;
    fn set_session(&self, user: &User) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
}

/// Trait for identity and session service operations
pub trait AuthServiceTrait: Send + Sync {
    /// Appends a new user (unique email) and establishes a session.
    fn signup(&self, new_user: NewUser) -> Result<UserProfile>;
    /// Establishes a session iff exactly one stored user matches.
    fn login(&self, email: &str, password: &str) -> Result<UserProfile>;
    /// Clears the session slot; idempotent.
    fn logout(&self) -> Result<()>;
    fn current_user(&self) -> Result<Option<UserProfile>>;
    /// Merges fields into the stored user list and the session slot.
    fn update_user(&self, update: UserUpdate) -> Result<UserProfile>;
    fn change_password(&self, current_password: &str, new_password: &str) -> Result<()>;
}

//! Auth module - identity and the persisted session slot.

mod auth_errors;
mod auth_model;
mod auth_repository;
mod auth_service;
mod auth_traits;

pub use auth_errors::AuthError;
pub use auth_model::{NewUser, User, UserProfile, UserUpdate};
pub use auth_repository::UserRepository;
pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, UserRepositoryTrait};

//! Family module - shared household members, tasks, and goals.

mod family_errors;
mod family_model;
mod family_repository;
mod family_service;
mod family_traits;

pub use family_errors::FamilyError;
pub use family_model::{
    FamilyGoal, FamilyMember, FamilyTask, NewFamilyGoal, NewFamilyMember, NewFamilyTask,
    TaskStatus,
};
pub use family_repository::FamilyRepository;
pub use family_service::FamilyService;
pub use family_traits::{FamilyRepositoryTrait, FamilyServiceTrait};

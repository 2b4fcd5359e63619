//! Incomes module - the parallel ledger to expenses.

mod incomes_model;
mod incomes_repository;
mod incomes_service;
mod incomes_traits;

pub use incomes_model::{Income, IncomeUpdate, NewIncome};
pub use incomes_repository::IncomeRepository;
pub use incomes_service::IncomeService;
pub use incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};

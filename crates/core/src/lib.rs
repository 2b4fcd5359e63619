//! Fintrack Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Fintrack.
//! It is storage-agnostic: every repository works against the
//! [`store::StoreBackend`] trait, which is implemented in-memory here (for
//! tests and ephemeral sessions) and by the `storage-json` crate for
//! persistence.

pub mod accounts;
pub mod analytics;
pub mod auth;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod family;
pub mod goals;
pub mod incomes;
pub mod settings;
pub mod store;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! JSON document storage implementation for Fintrack.
//!
//! This crate provides the persistent [`StoreBackend`] used outside of
//! tests: a single JSON document on disk holding every key of the store.
//! It is the only place in the application where file-system code exists;
//! `fintrack-core` is storage-agnostic and works with the backend trait.
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-json (this crate)
//!       │
//!       ▼
//!   store.json
//! ```

mod json_file_store;

pub use json_file_store::JsonFileStore;

// Re-export from fintrack-core for convenience
pub use fintrack_core::errors::{Error, Result, StoreError};
pub use fintrack_core::store::StoreBackend;

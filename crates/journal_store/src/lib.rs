//! Journal entry storage for Daybook.
//!
//! This crate provides the storage abstraction behind the journal service:
//! the [`JournalStore`] trait, an in-memory implementation for tests and
//! single-process use, and a SQLite implementation for durable storage.

mod error;
mod memory;
mod sqlite;
mod store;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use store::*;

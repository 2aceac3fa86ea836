//! Persistent result store.
//!
//! Writes the assembled service rows to a SQLite database so downstream
//! tooling can query them without re-running the scan.

mod error;
mod sqlite;

pub use error::StoreError;
pub use sqlite::ServiceStore;

//! SQLite-backed implementation of the registry.

pub mod errors;
pub mod sqlite;
mod types;

pub use sqlite::SqliteDb;

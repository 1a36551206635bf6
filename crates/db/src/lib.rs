//! Storage for the lifecycle registry of the depositor.
//!
//! The registry records which deposits have been initialized but not yet finalized. It is exposed
//! through the [`DepositRegistry`](registry::DepositRegistry) trait with an in-memory and a SQLite
//! implementation.

pub mod errors;
pub mod inmemory;
pub mod persistent;
pub mod registry;

#[cfg(test)]
mod test_utils;

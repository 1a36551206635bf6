//! This crate contains general types and pure functions that need to be shared across the crates
//! of the depositor workspace.
//!
//! It lies at the bottom of the crate-hierarchy in this workspace i.e., it does not depend on any
//! other crate in this workspace.

pub mod bitcoin_tx;
pub mod constants;
pub mod deposit_key;
pub mod errors;
pub mod records;
pub mod types;

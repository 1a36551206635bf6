//! This crate provides test-utilities shared by the crates in the depositor workspace.
//!
//! These utilities are mostly used to generate arbitrary values for testing purposes.

pub mod bitcoin;
pub mod deposit;
pub mod prelude;

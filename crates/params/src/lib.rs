//! This crate contains the write-once parameters that bind a depositor to the collaborators it
//! trusts.
//!
//! These parameters are set once when the depositor is constructed and never change afterwards.

pub mod depositor;
pub mod errors;
pub mod prelude;

//! This crate implements the lifecycle of a deposit of bitcoin that results in the minting of the
//! pegged token.
//!
//! A deposit goes through two phases:
//!
//! 1. **Initialization**: the funding transaction is revealed to the Bridge and the deposit is
//!    recorded as pending.
//! 2. **Finalization**: once the Bridge has swept the deposit (or the Vault has minted it
//!    optimistically), the pending entry is removed, the minted amount is computed net of fees
//!    and a [`DepositFinalizer`](finalizer::DepositFinalizer) hook is run.
//!
//! The [`DepositorController`](controller::DepositorController) ties these phases together. It
//! does not verify anything about Bitcoin itself; it relies on the state reported by the
//! [`Bridge`](collaborators::Bridge) and [`TbtcVault`](collaborators::TbtcVault) collaborators.

pub mod clock;
pub mod collaborators;
pub mod controller;
pub mod errors;
pub mod events;
pub mod fees;
pub mod finalizer;

#[cfg(test)]
pub(crate) mod testing;
#[cfg(test)]
mod tests;

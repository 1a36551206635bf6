//! Notifications published by the depositor.

use std::fmt;

use ethnum::U256;
use tbtc_depositor_primitives::types::DepositKey;

/// An observable change in the lifecycle of a deposit.
///
/// Events are only published for calls that succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositorEvent {
    /// The deposit was revealed to the Bridge and is now pending.
    DepositInitialized {
        /// The key of the deposit.
        deposit_key: DepositKey,

        /// UNIX timestamp (in seconds) of the initialization.
        initialized_at: u32,
    },

    /// The deposit was minted and is no longer pending.
    DepositFinalized {
        /// The key of the deposit.
        deposit_key: DepositKey,

        /// The amount of the pegged token minted for the deposit, net of fees.
        tbtc_amount: U256,

        /// UNIX timestamp (in seconds) of the finalization.
        finalized_at: u32,
    },
}

impl DepositorEvent {
    /// The key of the deposit this event refers to.
    pub const fn deposit_key(&self) -> DepositKey {
        match self {
            Self::DepositInitialized { deposit_key, .. }
            | Self::DepositFinalized { deposit_key, .. } => *deposit_key,
        }
    }
}

impl fmt::Display for DepositorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepositInitialized {
                deposit_key,
                initialized_at,
            } => write!(
                f,
                "DepositInitialized(deposit_key: {deposit_key}, initialized_at: {initialized_at})"
            ),
            Self::DepositFinalized {
                deposit_key,
                tbtc_amount,
                finalized_at,
            } => write!(
                f,
                "DepositFinalized(deposit_key: {deposit_key}, tbtc_amount: {tbtc_amount}, finalized_at: {finalized_at})"
            ),
        }
    }
}

//! Records owned by the Bridge and the Vault collaborators.
//!
//! These are read-only from the perspective of the depositor. A zeroed record is what the
//! collaborators report for a deposit they know nothing about.

use bitcoin::Amount;
use serde::{Deserialize, Serialize};

use crate::types::{Address, ExtraData};

/// The Bridge's record of a revealed deposit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    /// The account that revealed the deposit.
    pub depositor: Address,

    /// The amount locked in the funding output.
    pub amount: Amount,

    /// UNIX timestamp (in seconds) at which the deposit was revealed, `0` if it never was.
    pub revealed_at: u32,

    /// The vault the deposit is routed to.
    pub vault: Address,

    /// The treasury fee computed by the Bridge at reveal time.
    pub treasury_fee: Amount,

    /// UNIX timestamp (in seconds) at which the deposit was swept, `0` if it has not been swept
    /// yet.
    pub swept_at: u32,

    /// The payload supplied by the depositor at reveal time.
    pub extra_data: ExtraData,
}

impl DepositRequest {
    /// Whether the Bridge has seen a reveal for this deposit.
    pub const fn is_revealed(&self) -> bool {
        self.revealed_at != 0
    }

    /// Whether the Bridge has swept the deposit into one of its wallets.
    pub const fn is_swept(&self) -> bool {
        self.swept_at != 0
    }
}

/// The Vault's record of an optimistic minting request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimisticMintingRequest {
    /// UNIX timestamp (in seconds) at which optimistic minting was requested, `0` if it never
    /// was.
    pub requested_at: u64,

    /// UNIX timestamp (in seconds) at which optimistic minting was finalized, `0` if it has not
    /// been finalized.
    pub finalized_at: u64,
}

impl OptimisticMintingRequest {
    /// Whether the deposit was minted through the optimistic path.
    pub const fn is_finalized(&self) -> bool {
        self.finalized_at != 0
    }
}

/// The Bridge's deposit parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositParameters {
    /// Minimum amount a deposit must lock to be accepted by the Bridge.
    pub deposit_dust_threshold: Amount,

    /// Divisor used to compute the treasury fee taken from each deposit.
    pub deposit_treasury_fee_divisor: u64,

    /// Maximum fee the Bridge may spend sweeping a single deposit.
    ///
    /// The depositor always deducts this full amount when computing the minted amount.
    pub deposit_tx_max_fee: Amount,

    /// Period (in seconds) within which a deposit must be revealed relative to its refund
    /// locktime.
    pub deposit_reveal_ahead_period: u32,
}

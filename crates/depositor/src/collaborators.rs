//! Interfaces to the external systems the depositor relies on.
//!
//! Both the Bridge and the Vault are trusted: the depositor does not verify Bitcoin transactions
//! or proofs itself and takes the records reported by these collaborators at face value.

use async_trait::async_trait;
use tbtc_depositor_primitives::{
    bitcoin_tx::{BitcoinTxInfo, DepositRevealInfo},
    records::{DepositParameters, DepositRequest, OptimisticMintingRequest},
    types::{DepositKey, ExtraData},
};

/// The Bridge that validates deposit reveals and tracks deposits until they are swept.
#[async_trait]
pub trait Bridge: Send + Sync {
    /// The error returned when a call to the Bridge fails or is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reveals a deposit along with a payload that is bound to it.
    ///
    /// The Bridge records the deposit under the key derived from `funding_tx` and
    /// [`DepositRevealInfo::funding_output_index`]. It rejects a deposit that has already been
    /// revealed, which is what prevents the same deposit from being initialized twice.
    async fn reveal_deposit_with_extra_data(
        &self,
        funding_tx: &BitcoinTxInfo,
        reveal: &DepositRevealInfo,
        extra_data: ExtraData,
    ) -> Result<(), Self::Error>;

    /// Gets the Bridge's record of a deposit.
    ///
    /// A deposit unknown to the Bridge yields a zeroed record.
    async fn deposit(&self, deposit_key: DepositKey) -> Result<DepositRequest, Self::Error>;

    /// Gets the Bridge's current deposit parameters.
    async fn deposit_parameters(&self) -> Result<DepositParameters, Self::Error>;
}

/// The Vault that mints the pegged token, optionally ahead of the Bridge's sweep.
#[async_trait]
pub trait TbtcVault: Send + Sync {
    /// The error returned when a call to the Vault fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Gets the Vault's record of optimistic minting for a deposit.
    ///
    /// A deposit unknown to the Vault yields a zeroed record.
    async fn optimistic_minting_request(
        &self,
        deposit_key: DepositKey,
    ) -> Result<OptimisticMintingRequest, Self::Error>;

    /// Gets the divisor used to compute the optimistic minting fee. Zero means no fee.
    async fn optimistic_minting_fee_divisor(&self) -> Result<u32, Self::Error>;
}

//! The extension point invoked once a deposit has been finalized.

use async_trait::async_trait;
use ethnum::U256;
use tbtc_depositor_primitives::types::{DepositKey, ExtraData};

/// Hook that acts on finalized deposits, for example by forwarding the minted amount to the
/// recipient encoded in the extra data.
///
/// The hook is invoked at most once per deposit, after the deposit has been removed from the
/// registry. If it fails, the finalization is rolled back and may be attempted again.
#[async_trait]
pub trait DepositFinalizer: Send {
    /// The error returned when the hook fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called with the amount of the pegged token minted for the deposit (net of fees, with 18
    /// decimals of precision) and the payload that was supplied when the deposit was revealed.
    async fn on_deposit_finalized(
        &mut self,
        deposit_key: DepositKey,
        tbtc_amount: U256,
        extra_data: ExtraData,
    ) -> Result<(), Self::Error>;
}

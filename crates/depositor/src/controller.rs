//! The controller that drives deposits from initialization to finalization.

use bitcoin::Amount;
use ethnum::U256;
use tbtc_depositor_db::registry::DepositRegistry;
use tbtc_depositor_params::prelude::DepositorParams;
use tbtc_depositor_primitives::{
    bitcoin_tx::{BitcoinTxInfo, DepositRevealInfo},
    deposit_key::funding_deposit_key,
    records::DepositRequest,
    types::{DepositKey, ExtraData},
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, SystemClock},
    collaborators::{Bridge, TbtcVault},
    errors::{DepositorError, DepositorResult},
    events::DepositorEvent,
    fees::{self, FeeInputs},
    finalizer::DepositFinalizer,
};

/// Number of events a lagging subscriber may fall behind by before it starts missing events.
pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// The outcome of a successful call to [`DepositorController::initialize_deposit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializedDeposit {
    /// The key under which the deposit is now pending.
    pub deposit_key: DepositKey,

    /// The amount recorded by the Bridge with 18 decimals of precision, before any fees.
    pub initial_deposit_amount: U256,
}

/// The outcome of a successful call to [`DepositorController::finalize_deposit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizedDeposit {
    /// The key of the deposit that is no longer pending.
    pub deposit_key: DepositKey,

    /// The amount recorded by the Bridge with 18 decimals of precision, before any fees.
    pub initial_deposit_amount: U256,

    /// The amount of the pegged token minted for the deposit, net of fees.
    pub tbtc_amount: U256,

    /// The payload supplied when the deposit was revealed.
    pub extra_data: ExtraData,
}

/// Drives deposits through their lifecycle.
///
/// A deposit is initialized by revealing it to the [`Bridge`] and becomes pending in the
/// [`DepositRegistry`]. Once the Bridge has swept it, or the [`TbtcVault`] has minted it
/// optimistically, it can be finalized: the pending entry is removed and the
/// [`DepositFinalizer`] is handed the minted amount.
///
/// Each call either succeeds as a whole or leaves the registry as it found it. Events are only
/// published for calls that succeed.
#[derive(Debug)]
pub struct DepositorController<B, V, R, F, C = SystemClock> {
    params: DepositorParams,
    bridge: B,
    tbtc_vault: V,
    registry: R,
    finalizer: F,
    clock: C,
    events: broadcast::Sender<DepositorEvent>,
}

impl<B, V, R, F> DepositorController<B, V, R, F>
where
    B: Bridge,
    V: TbtcVault,
    R: DepositRegistry,
    F: DepositFinalizer,
{
    /// Creates a new controller that timestamps events with the system clock.
    pub fn new(
        params: DepositorParams,
        bridge: B,
        tbtc_vault: V,
        registry: R,
        finalizer: F,
    ) -> Self {
        Self::with_clock(params, bridge, tbtc_vault, registry, finalizer, SystemClock)
    }
}

impl<B, V, R, F, C> DepositorController<B, V, R, F, C>
where
    B: Bridge,
    V: TbtcVault,
    R: DepositRegistry,
    F: DepositFinalizer,
    C: Clock,
{
    /// Creates a new controller that timestamps events with the given clock.
    pub fn with_clock(
        params: DepositorParams,
        bridge: B,
        tbtc_vault: V,
        registry: R,
        finalizer: F,
        clock: C,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            params,
            bridge,
            tbtc_vault,
            registry,
            finalizer,
            clock,
            events,
        }
    }

    /// The parameters the controller was created with.
    pub const fn params(&self) -> &DepositorParams {
        &self.params
    }

    /// The registry of pending deposits.
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// The finalization hook.
    pub const fn finalizer(&self) -> &F {
        &self.finalizer
    }

    /// Subscribes to the events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DepositorEvent> {
        self.events.subscribe()
    }

    /// Initializes a deposit by revealing it to the Bridge.
    ///
    /// The deposit is marked as pending before the Bridge is called so that the Bridge (or
    /// anything it calls back into) already observes it as such.
    ///
    /// # Errors
    ///
    /// - [`DepositorError::VaultMismatch`] if the reveal names a vault other than the configured
    ///   one.
    /// - [`DepositorError::Bridge`] if the Bridge rejects the reveal, for example because the
    ///   deposit was already revealed.
    pub async fn initialize_deposit(
        &mut self,
        funding_tx: &BitcoinTxInfo,
        reveal: &DepositRevealInfo,
        extra_data: ExtraData,
    ) -> DepositorResult<InitializedDeposit> {
        let expected = self.params.tbtc_vault();
        if reveal.vault != expected {
            return Err(DepositorError::VaultMismatch {
                expected,
                actual: reveal.vault,
            });
        }

        let deposit_key = funding_deposit_key(funding_tx, reveal.funding_output_index);
        debug!(%deposit_key, funding_output_index = reveal.funding_output_index, "initializing deposit");

        let newly_pending = self.registry.mark_pending(deposit_key).await?;
        let event = DepositorEvent::DepositInitialized {
            deposit_key,
            initialized_at: self.clock.now(),
        };

        let revealed = self
            .reveal_to_bridge(deposit_key, funding_tx, reveal, extra_data)
            .await;

        let initial_deposit_amount = match revealed {
            Ok(amount) => amount,
            Err(err) => {
                // only undo what this call did; an entry that was already there belongs to an
                // earlier initialization
                if newly_pending {
                    self.rollback_to_absent(deposit_key).await;
                }

                return Err(err);
            }
        };

        self.publish(event);
        info!(%deposit_key, %initial_deposit_amount, "deposit initialized");

        Ok(InitializedDeposit {
            deposit_key,
            initial_deposit_amount,
        })
    }

    /// Finalizes a deposit that has been minted.
    ///
    /// The deposit is removed from the registry before the minted amount is computed and before
    /// the finalization hook runs, so neither can finalize it a second time. Only the call that
    /// actually removes the entry goes on to run the hook, even when several controllers share
    /// the same registry.
    ///
    /// # Errors
    ///
    /// - [`DepositorError::NotInitialized`] if the deposit is not pending.
    /// - [`DepositorError::NotYetMinted`] if the deposit has been neither swept nor minted
    ///   optimistically.
    /// - [`DepositorError::Fee`] if the deposit does not cover its fees.
    /// - [`DepositorError::Finalizer`] if the hook fails.
    pub async fn finalize_deposit(
        &mut self,
        deposit_key: DepositKey,
    ) -> DepositorResult<FinalizedDeposit> {
        if !self.registry.is_pending(deposit_key).await? {
            return Err(DepositorError::NotInitialized(deposit_key));
        }

        let deposit = self
            .bridge
            .deposit(deposit_key)
            .await
            .map_err(DepositorError::bridge)?;
        let minting = self
            .tbtc_vault
            .optimistic_minting_request(deposit_key)
            .await
            .map_err(DepositorError::vault)?;

        debug!(%deposit_key, swept_at = deposit.swept_at, optimistically_finalized_at = minting.finalized_at, "checking whether deposit was minted");

        if !deposit.is_swept() && !minting.is_finalized() {
            return Err(DepositorError::NotYetMinted(deposit_key));
        }

        // the removal is the claim; a concurrent finalization sharing the registry may have
        // removed the entry since it was checked above
        if !self.registry.clear_pending(deposit_key).await? {
            return Err(DepositorError::NotInitialized(deposit_key));
        }

        match self.complete_finalization(deposit_key, &deposit).await {
            Ok(finalized) => {
                info!(%deposit_key, tbtc_amount = %finalized.tbtc_amount, "deposit finalized");

                Ok(finalized)
            }
            Err(err) => {
                self.rollback_to_pending(deposit_key).await;

                Err(err)
            }
        }
    }

    /// Computes the amount of the pegged token minted for a deposit of `amount` from which the
    /// Bridge took `treasury_fee`.
    ///
    /// The current optimistic minting fee divisor and maximum sweep transaction fee are fetched
    /// from the collaborators. See [`fees`] for the formula.
    pub async fn calculate_tbtc_amount(
        &self,
        amount: Amount,
        treasury_fee: Amount,
    ) -> DepositorResult<U256> {
        let divisor = self
            .tbtc_vault
            .optimistic_minting_fee_divisor()
            .await
            .map_err(DepositorError::vault)?;
        let params = self
            .bridge
            .deposit_parameters()
            .await
            .map_err(DepositorError::bridge)?;

        let tbtc_amount = fees::calculate_tbtc_amount(&FeeInputs {
            amount,
            treasury_fee,
            deposit_tx_max_fee: params.deposit_tx_max_fee,
            minting_fee_divisor: U256::from(divisor),
        })?;

        Ok(tbtc_amount)
    }

    /// The smallest deposit the Bridge accepts, with 18 decimals of precision.
    pub async fn min_deposit_amount(&self) -> DepositorResult<U256> {
        let params = self
            .bridge
            .deposit_parameters()
            .await
            .map_err(DepositorError::bridge)?;

        Ok(fees::to_token_precision(params.deposit_dust_threshold))
    }

    /// Checks whether a deposit is pending.
    pub async fn is_pending(&self, deposit_key: DepositKey) -> DepositorResult<bool> {
        Ok(self.registry.is_pending(deposit_key).await?)
    }

    /// Gets all the pending deposits ordered by key.
    pub async fn pending_deposits(&self) -> DepositorResult<Vec<DepositKey>> {
        Ok(self.registry.pending_deposits().await?)
    }

    async fn reveal_to_bridge(
        &self,
        deposit_key: DepositKey,
        funding_tx: &BitcoinTxInfo,
        reveal: &DepositRevealInfo,
        extra_data: ExtraData,
    ) -> DepositorResult<U256> {
        self.bridge
            .reveal_deposit_with_extra_data(funding_tx, reveal, extra_data)
            .await
            .map_err(DepositorError::bridge)?;

        let deposit = self
            .bridge
            .deposit(deposit_key)
            .await
            .map_err(DepositorError::bridge)?;

        Ok(fees::to_token_precision(deposit.amount))
    }

    async fn complete_finalization(
        &mut self,
        deposit_key: DepositKey,
        deposit: &DepositRequest,
    ) -> DepositorResult<FinalizedDeposit> {
        let tbtc_amount = self
            .calculate_tbtc_amount(deposit.amount, deposit.treasury_fee)
            .await?;

        let event = DepositorEvent::DepositFinalized {
            deposit_key,
            tbtc_amount,
            finalized_at: self.clock.now(),
        };

        self.finalizer
            .on_deposit_finalized(deposit_key, tbtc_amount, deposit.extra_data)
            .await
            .map_err(DepositorError::finalizer)?;

        self.publish(event);

        Ok(FinalizedDeposit {
            deposit_key,
            initial_deposit_amount: fees::to_token_precision(deposit.amount),
            tbtc_amount,
            extra_data: deposit.extra_data,
        })
    }

    async fn rollback_to_absent(&self, deposit_key: DepositKey) {
        debug!(%deposit_key, "rolling back pending entry");

        if let Err(err) = self.registry.clear_pending(deposit_key).await {
            warn!(%deposit_key, %err, "could not remove pending entry after failed initialization");
        }
    }

    async fn rollback_to_pending(&self, deposit_key: DepositKey) {
        debug!(%deposit_key, "restoring pending entry");

        if let Err(err) = self.registry.mark_pending(deposit_key).await {
            warn!(%deposit_key, %err, "could not restore pending entry after failed finalization");
        }
    }

    fn publish(&self, event: DepositorEvent) {
        // no subscribers is not an error
        if self.events.send(event).is_err() {
            debug!(%event, "no subscribers for event");
        }
    }
}

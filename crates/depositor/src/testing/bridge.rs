use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use bitcoin::{consensus, Amount, TxOut};
use tbtc_depositor_db::{inmemory::InMemoryDepositRegistry, registry::DepositRegistry};
use tbtc_depositor_primitives::{
    bitcoin_tx::{BitcoinTxInfo, DepositRevealInfo},
    deposit_key::funding_deposit_key,
    records::{DepositParameters, DepositRequest},
    types::{Address, DepositKey, ExtraData},
};
use thiserror::Error;

use crate::collaborators::Bridge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum MockBridgeError {
    #[error("bridge is unavailable")]
    Unavailable,

    #[error("output vector cannot be parsed")]
    MalformedTransaction,

    #[error("funding output {0} does not exist")]
    OutputNotFound(u32),

    #[error("deposit already revealed")]
    DepositAlreadyRevealed,
}

#[derive(Debug, Default)]
struct BridgeState {
    deposits: HashMap<DepositKey, DepositRequest>,
    params: DepositParameters,
    unavailable: bool,
    pending_at_reveal: Vec<bool>,
}

/// A Bridge that accepts any well-formed reveal exactly once.
///
/// It also records whether the deposit was already pending in `registry` whenever a reveal is
/// attempted.
#[derive(Debug, Clone)]
pub(crate) struct MockBridge {
    state: Arc<Mutex<BridgeState>>,
    registry: InMemoryDepositRegistry,
    depositor: Address,
    now: u32,
}

impl MockBridge {
    pub(crate) fn new(
        params: DepositParameters,
        registry: InMemoryDepositRegistry,
        depositor: Address,
        now: u32,
    ) -> Self {
        let state = BridgeState {
            params,
            ..Default::default()
        };

        Self {
            state: Arc::new(Mutex::new(state)),
            registry,
            depositor,
            now,
        }
    }

    /// Makes every subsequent reveal fail.
    pub(crate) fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unwrap().unavailable = unavailable;
    }

    pub(crate) fn set_params(&self, params: DepositParameters) {
        self.state.lock().unwrap().params = params;
    }

    /// Marks a revealed deposit as swept at `swept_at`.
    pub(crate) fn sweep(&self, deposit_key: DepositKey, swept_at: u32) {
        let mut state = self.state.lock().unwrap();
        let deposit = state
            .deposits
            .get_mut(&deposit_key)
            .expect("only revealed deposits can be swept");

        deposit.swept_at = swept_at;
    }

    pub(crate) fn deposit_record(&self, deposit_key: DepositKey) -> Option<DepositRequest> {
        self.state.lock().unwrap().deposits.get(&deposit_key).cloned()
    }

    /// Whether the deposit was pending at each reveal attempt, in order.
    pub(crate) fn pending_at_reveal(&self) -> Vec<bool> {
        self.state.lock().unwrap().pending_at_reveal.clone()
    }
}

#[async_trait]
impl Bridge for MockBridge {
    type Error = MockBridgeError;

    async fn reveal_deposit_with_extra_data(
        &self,
        funding_tx: &BitcoinTxInfo,
        reveal: &DepositRevealInfo,
        extra_data: ExtraData,
    ) -> Result<(), Self::Error> {
        let deposit_key = funding_deposit_key(funding_tx, reveal.funding_output_index);
        let pending = self
            .registry
            .is_pending(deposit_key)
            .await
            .expect("in-memory registry must not fail");

        let mut state = self.state.lock().unwrap();
        state.pending_at_reveal.push(pending);

        if state.unavailable {
            return Err(MockBridgeError::Unavailable);
        }

        let outputs: Vec<TxOut> = consensus::deserialize(&funding_tx.output_vector)
            .map_err(|_| MockBridgeError::MalformedTransaction)?;
        let output = outputs
            .get(reveal.funding_output_index as usize)
            .ok_or(MockBridgeError::OutputNotFound(reveal.funding_output_index))?;

        if state.deposits.contains_key(&deposit_key) {
            return Err(MockBridgeError::DepositAlreadyRevealed);
        }

        let treasury_fee = match state.params.deposit_treasury_fee_divisor {
            0 => Amount::ZERO,
            divisor => Amount::from_sat(output.value.to_sat() / divisor),
        };

        let deposit = DepositRequest {
            depositor: self.depositor,
            amount: output.value,
            revealed_at: self.now,
            vault: reveal.vault,
            treasury_fee,
            swept_at: 0,
            extra_data,
        };
        state.deposits.insert(deposit_key, deposit);

        Ok(())
    }

    async fn deposit(&self, deposit_key: DepositKey) -> Result<DepositRequest, Self::Error> {
        // suspend like a remote read would so that concurrent calls interleave here
        tokio::task::yield_now().await;

        let state = self.state.lock().unwrap();

        Ok(state
            .deposits
            .get(&deposit_key)
            .cloned()
            .unwrap_or_default())
    }

    async fn deposit_parameters(&self) -> Result<DepositParameters, Self::Error> {
        Ok(self.state.lock().unwrap().params)
    }
}

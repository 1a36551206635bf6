use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tbtc_depositor_primitives::{records::OptimisticMintingRequest, types::DepositKey};

use crate::collaborators::TbtcVault;

#[derive(Debug, Default)]
struct VaultState {
    requests: HashMap<DepositKey, OptimisticMintingRequest>,
    fee_divisor: u32,
}

/// A Vault whose optimistic minting records are set by the test.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockVault {
    state: Arc<Mutex<VaultState>>,
}

impl MockVault {
    pub(crate) fn new(fee_divisor: u32) -> Self {
        let state = VaultState {
            fee_divisor,
            ..Default::default()
        };

        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub(crate) fn set_fee_divisor(&self, fee_divisor: u32) {
        self.state.lock().unwrap().fee_divisor = fee_divisor;
    }

    /// Records that optimistic minting was requested and finalized for the deposit.
    pub(crate) fn finalize_optimistic_minting(&self, deposit_key: DepositKey, at: u64) {
        let request = OptimisticMintingRequest {
            requested_at: at,
            finalized_at: at,
        };

        self.state
            .lock()
            .unwrap()
            .requests
            .insert(deposit_key, request);
    }

    /// Records that optimistic minting was requested but not finalized for the deposit.
    pub(crate) fn request_optimistic_minting(&self, deposit_key: DepositKey, at: u64) {
        let request = OptimisticMintingRequest {
            requested_at: at,
            finalized_at: 0,
        };

        self.state
            .lock()
            .unwrap()
            .requests
            .insert(deposit_key, request);
    }
}

#[async_trait]
impl TbtcVault for MockVault {
    type Error = Infallible;

    async fn optimistic_minting_request(
        &self,
        deposit_key: DepositKey,
    ) -> Result<OptimisticMintingRequest, Self::Error> {
        let state = self.state.lock().unwrap();

        Ok(state
            .requests
            .get(&deposit_key)
            .copied()
            .unwrap_or_default())
    }

    async fn optimistic_minting_fee_divisor(&self) -> Result<u32, Self::Error> {
        Ok(self.state.lock().unwrap().fee_divisor)
    }
}

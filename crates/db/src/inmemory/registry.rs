//! In-memory registry of pending deposits.

use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use tbtc_depositor_primitives::types::DepositKey;
use tokio::sync::RwLock;
use tracing::trace;

use crate::{errors::DbResult, registry::DepositRegistry};

/// In-memory registry of pending deposits.
///
/// Clones share the same underlying set.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDepositRegistry {
    /// deposit keys that are currently pending
    pending: Arc<RwLock<HashSet<DepositKey>>>,
}

impl InMemoryDepositRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepositRegistry for InMemoryDepositRegistry {
    async fn mark_pending(&self, deposit_key: DepositKey) -> DbResult<bool> {
        trace!(action = "trying to acquire wlock on pending deposits", %deposit_key);
        let mut pending = self.pending.write().await;
        trace!(event = "wlock acquired on pending deposits", %deposit_key);

        Ok(pending.insert(deposit_key))
    }

    async fn is_pending(&self, deposit_key: DepositKey) -> DbResult<bool> {
        Ok(self.pending.read().await.contains(&deposit_key))
    }

    async fn clear_pending(&self, deposit_key: DepositKey) -> DbResult<bool> {
        trace!(action = "trying to acquire wlock on pending deposits", %deposit_key);
        let mut pending = self.pending.write().await;
        trace!(event = "wlock acquired on pending deposits", %deposit_key);

        Ok(pending.remove(&deposit_key))
    }

    async fn pending_deposits(&self) -> DbResult<Vec<DepositKey>> {
        let mut keys: Vec<DepositKey> = self.pending.read().await.iter().copied().collect();
        keys.sort();

        Ok(keys)
    }
}

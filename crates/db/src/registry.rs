//! The lifecycle registry interface.

use async_trait::async_trait;
use tbtc_depositor_primitives::types::DepositKey;

use crate::errors::DbResult;

/// Interface to the registry of pending deposits.
///
/// A deposit is pending between its initialization and its finalization. The registry only knows
/// whether an entry for a [`DepositKey`] is present. Absence means either that the deposit was
/// never initialized or that it has already been finalized; the registry does not distinguish the
/// two.
///
/// Entries for distinct keys are independent of each other.
#[async_trait]
pub trait DepositRegistry: Send + Sync {
    /// Marks the deposit as pending.
    ///
    /// Returns `true` if the entry was created by this call and `false` if the deposit was already
    /// pending.
    async fn mark_pending(&self, deposit_key: DepositKey) -> DbResult<bool>;

    /// Checks whether the deposit is pending.
    async fn is_pending(&self, deposit_key: DepositKey) -> DbResult<bool>;

    /// Removes the entry for the deposit.
    ///
    /// Returns `true` if an entry was removed by this call and `false` if there was none.
    async fn clear_pending(&self, deposit_key: DepositKey) -> DbResult<bool>;

    /// Gets all the pending deposits ordered by key.
    async fn pending_deposits(&self) -> DbResult<Vec<DepositKey>>;
}

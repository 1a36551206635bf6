//! Errors returned by the depositor.

use tbtc_depositor_db::errors::DbError;
use tbtc_depositor_primitives::types::{Address, DepositKey};
use thiserror::Error;

use crate::fees::FeeError;

/// A type-erased error raised by one of the collaborators.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while initializing or finalizing a deposit.
#[derive(Debug, Error)]
pub enum DepositorError {
    /// The reveal routes the deposit to a vault other than the configured one.
    #[error("vault mismatch: expected {expected}, got {actual}")]
    VaultMismatch {
        /// The configured vault.
        expected: Address,

        /// The vault named in the reveal.
        actual: Address,
    },

    /// The deposit is not pending: it was either never initialized or has already been
    /// finalized.
    #[error("deposit {0} is not initialized")]
    NotInitialized(DepositKey),

    /// The deposit has been neither swept by the Bridge nor minted optimistically by the Vault.
    #[error("deposit {0} has not been minted yet")]
    NotYetMinted(DepositKey),

    /// The deposit does not cover its fees.
    #[error("fee: {0}")]
    Fee(#[from] FeeError),

    /// The registry of pending deposits could not be accessed.
    #[error("registry: {0}")]
    Registry(#[from] DbError),

    /// The Bridge failed or rejected the call.
    #[error("bridge: {0}")]
    Bridge(#[source] BoxedError),

    /// The Vault failed.
    #[error("vault: {0}")]
    Vault(#[source] BoxedError),

    /// The finalization hook failed.
    #[error("finalizer: {0}")]
    Finalizer(#[source] BoxedError),
}

impl DepositorError {
    pub(crate) fn bridge(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Bridge(Box::new(err))
    }

    pub(crate) fn vault(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Vault(Box::new(err))
    }

    pub(crate) fn finalizer(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Finalizer(Box::new(err))
    }
}

/// Result type for depositor operations.
pub type DepositorResult<T> = Result<T, DepositorError>;

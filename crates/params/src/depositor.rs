//! Parameters that identify the Bridge and the Vault collaborators.

use serde::{Deserialize, Serialize};
use tbtc_depositor_primitives::types::Address;

use crate::errors::ConfigurationError;

/// The addresses of the collaborators the depositor interacts with.
///
/// These are validated on construction (including deserialization) and cannot be mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDepositorParams")]
pub struct DepositorParams {
    /// The Bridge that deposits are revealed to.
    bridge: Address,

    /// The Vault that deposits must be routed to.
    tbtc_vault: Address,
}

/// Unvalidated form of [`DepositorParams`] as it appears in a config file.
#[derive(Debug, Deserialize)]
struct RawDepositorParams {
    bridge: Address,
    tbtc_vault: Address,
}

impl TryFrom<RawDepositorParams> for DepositorParams {
    type Error = ConfigurationError;

    fn try_from(raw: RawDepositorParams) -> Result<Self, Self::Error> {
        Self::new(raw.bridge, raw.tbtc_vault)
    }
}

impl DepositorParams {
    /// Creates a new set of parameters.
    ///
    /// Fails if either of the addresses is the zero address.
    pub fn new(bridge: Address, tbtc_vault: Address) -> Result<Self, ConfigurationError> {
        if bridge.is_zero() {
            return Err(ConfigurationError::ZeroAddress { field: "bridge" });
        }

        if tbtc_vault.is_zero() {
            return Err(ConfigurationError::ZeroAddress {
                field: "tbtc_vault",
            });
        }

        Ok(Self { bridge, tbtc_vault })
    }

    /// The address of the Bridge.
    pub const fn bridge(&self) -> Address {
        self.bridge
    }

    /// The address of the Vault.
    pub const fn tbtc_vault(&self) -> Address {
        self.tbtc_vault
    }
}

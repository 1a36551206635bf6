//! The Bitcoin-side inputs of a deposit reveal.

use bitcoin::{consensus, Transaction};
use serde::{Deserialize, Serialize};

use crate::types::Address;

/// A Bitcoin transaction split into the components that are hashed to obtain its txid.
///
/// Each field holds the exact bytes of the consensus (non-witness) serialization of the
/// corresponding component so that the Bridge collaborator can parse and validate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitcoinTxInfo {
    /// Transaction version as 4 little-endian bytes.
    pub version: [u8; 4],

    /// All transaction inputs prepended by the number of inputs encoded as a compact size
    /// integer.
    pub input_vector: Vec<u8>,

    /// All transaction outputs prepended by the number of outputs encoded as a compact size
    /// integer.
    pub output_vector: Vec<u8>,

    /// Transaction locktime as 4 little-endian bytes.
    pub locktime: [u8; 4],
}

impl From<&Transaction> for BitcoinTxInfo {
    fn from(tx: &Transaction) -> Self {
        Self {
            version: tx.version.0.to_le_bytes(),
            input_vector: consensus::serialize(&tx.input),
            output_vector: consensus::serialize(&tx.output),
            locktime: tx.lock_time.to_consensus_u32().to_le_bytes(),
        }
    }
}

/// The data revealed by the depositor that is needed to locate and validate the funding output.
///
/// Only [`Self::funding_output_index`] and [`Self::vault`] are interpreted by the depositor; the
/// rest is forwarded to the Bridge collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRevealInfo {
    /// Index of the deposit output in the funding transaction.
    pub funding_output_index: u32,

    /// The blinding factor used in the deposit script.
    pub blinding_factor: [u8; 8],

    /// The 20-byte hash of the public key of the wallet the deposit is sent to.
    pub wallet_pubkey_hash: [u8; 20],

    /// The 20-byte hash of the public key that can take the deposit back after the refund
    /// locktime.
    pub refund_pubkey_hash: [u8; 20],

    /// The refund locktime as 4 little-endian bytes.
    pub refund_locktime: [u8; 4],

    /// The vault the deposit is routed to.
    pub vault: Address,
}

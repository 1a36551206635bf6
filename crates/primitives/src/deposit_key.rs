//! Derivation of deposit keys from the identity of the funding transaction.
//!
//! The derivation must match the one used by the Bridge collaborator bit-for-bit since the key is
//! the only handle with which the depositor can look up the Bridge's deposit record:
//!
//! ```text
//! tx_identity = sha256d(version || input_vector || output_vector || locktime)
//! deposit_key = keccak256(tx_identity || be_bytes(output_index))
//! ```
//!
//! `tx_identity` is kept in its internal byte order i.e., the reverse of how txids are usually
//! displayed.

use bitcoin::{
    hashes::{Hash, HashEngine},
    Txid,
};
use sha3::{Digest, Keccak256};

use crate::{bitcoin_tx::BitcoinTxInfo, types::DepositKey};

/// Computes the identity of a Bitcoin transaction.
///
/// This is the double SHA-256 digest of the concatenation of the transaction's version, input
/// vector, output vector and locktime, which is exactly the txid of the transaction.
pub fn tx_identity(tx: &BitcoinTxInfo) -> Txid {
    let mut engine = Txid::engine();

    engine.input(&tx.version);
    engine.input(&tx.input_vector);
    engine.input(&tx.output_vector);
    engine.input(&tx.locktime);

    Txid::from_engine(engine)
}

/// Combines the identity of the funding transaction with the index of the funding output into a
/// [`DepositKey`].
pub fn deposit_key(tx_identity: &Txid, output_index: u32) -> DepositKey {
    let mut hasher = Keccak256::new();

    hasher.update(tx_identity.as_byte_array());
    hasher.update(output_index.to_be_bytes());

    DepositKey::new(hasher.finalize().into())
}

/// Computes the [`DepositKey`] for the output at `output_index` in the funding transaction `tx`.
pub fn funding_deposit_key(tx: &BitcoinTxInfo, output_index: u32) -> DepositKey {
    deposit_key(&tx_identity(tx), output_index)
}

//! Generators for the values exchanged with the Bridge and the Vault.

use bitcoin::{
    key::rand::{rngs::OsRng, Rng},
    Amount,
};
use tbtc_depositor_primitives::{
    bitcoin_tx::{BitcoinTxInfo, DepositRevealInfo},
    types::{Address, DepositKey, ExtraData},
};

use crate::bitcoin::generate_funding_tx;

/// Generates a random deposit key.
pub fn generate_deposit_key() -> DepositKey {
    let mut bytes = [0u8; 32];
    OsRng.fill(&mut bytes);

    DepositKey::new(bytes)
}

/// Generates a random, non-zero address.
pub fn generate_address() -> Address {
    let mut bytes = [0u8; 20];
    OsRng.fill(&mut bytes);
    // make sure we never produce the zero address
    bytes[0] |= 1;

    Address::new(bytes)
}

/// Generates a random extra data payload.
pub fn generate_extra_data() -> ExtraData {
    let mut bytes = [0u8; 32];
    OsRng.fill(&mut bytes);

    ExtraData::new(bytes)
}

/// Generates reveal info for the first output of a funding transaction that targets `vault`.
pub fn generate_reveal_info(vault: Address) -> DepositRevealInfo {
    DepositRevealInfo {
        funding_output_index: 0,
        blinding_factor: OsRng.gen(),
        wallet_pubkey_hash: OsRng.gen(),
        refund_pubkey_hash: OsRng.gen(),
        refund_locktime: OsRng.gen(),
        vault,
    }
}

/// Generates a funding transaction locking `amount` together with the reveal info of its deposit
/// output.
pub fn generate_deposit_reveal(
    amount: Amount,
    vault: Address,
) -> (BitcoinTxInfo, DepositRevealInfo) {
    let funding_tx = generate_funding_tx(amount);

    (BitcoinTxInfo::from(&funding_tx), generate_reveal_info(vault))
}

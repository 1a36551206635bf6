//! Module to generate arbitrary bitcoin values for testing.

use bitcoin::{
    absolute::LockTime,
    hashes::Hash,
    key::rand::{rngs::OsRng, Rng},
    transaction::Version,
    Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness,
};

/// Generates a random transaction ID.
pub fn generate_txid() -> Txid {
    let mut txid = [0u8; 32];
    OsRng.fill(&mut txid);

    Txid::from_byte_array(txid)
}

/// Generates a random outpoint.
pub fn generate_outpoint() -> OutPoint {
    let vout: u32 = OsRng.gen();

    OutPoint {
        txid: generate_txid(),
        vout,
    }
}

/// Generates a random transaction.
pub fn generate_tx(num_inputs: usize, num_outputs: usize) -> Transaction {
    let inputs = (0..num_inputs)
        .map(|_| TxIn {
            previous_output: generate_outpoint(),
            witness: Witness::new(),
            sequence: Sequence(0),
            script_sig: ScriptBuf::new(),
        })
        .collect();

    let outputs = (0..num_outputs)
        .map(|_| {
            let value: u32 = OsRng.gen();

            TxOut {
                value: Amount::from_sat(u64::from(value)),
                script_pubkey: ScriptBuf::new(),
            }
        })
        .collect();

    Transaction {
        version: Version(1),
        lock_time: LockTime::from_consensus(0),
        input: inputs,
        output: outputs,
    }
}

/// Generates a funding transaction that locks `amount` in its first output.
///
/// The transaction spends a random outpoint and carries a random change output so that no two
/// generated transactions share the same txid.
pub fn generate_funding_tx(amount: Amount) -> Transaction {
    let mut tx = generate_tx(1, 2);
    tx.version = Version::TWO;
    tx.output[0].value = amount;

    tx
}

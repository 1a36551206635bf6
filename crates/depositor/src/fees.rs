//! Conversion of deposited bitcoin amounts into the amount of the pegged token to mint.
//!
//! Bitcoin amounts carry 8 decimals of precision while the token carries 18. The amount to mint
//! is obtained by scaling the deposit, net of the treasury fee, and then deducting the optimistic
//! minting fee followed by the maximum sweep transaction fee:
//!
//! ```text
//! net_scaled        = (amount - treasury_fee) * 10^10
//! minting_fee       = net_scaled / divisor          (0 if divisor == 0)
//! tbtc_amount       = net_scaled - minting_fee - deposit_tx_max_fee * 10^10
//! ```
//!
//! The minting fee is always computed on `net_scaled` i.e., before the maximum transaction fee is
//! deducted. Every subtraction is checked; none of them saturate.

use bitcoin::Amount;
use ethnum::U256;
use tbtc_depositor_primitives::constants::SATOSHI_MULTIPLIER;
use thiserror::Error;

/// Errors that can occur while computing the amount to mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeeError {
    /// A deduction exceeded the amount it was deducted from.
    ///
    /// Both values are expressed with 18 decimals of precision, whichever step failed.
    #[error("arithmetic underflow: cannot subtract {subtrahend} from {minuend}")]
    ArithmeticUnderflow {
        /// The amount being deducted from.
        minuend: U256,

        /// The amount being deducted.
        subtrahend: U256,
    },
}

/// Result type for fee computations.
pub type FeeResult<T> = Result<T, FeeError>;

/// The values that determine how much of a deposit is minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeInputs {
    /// The amount locked in the funding output.
    pub amount: Amount,

    /// The treasury fee recorded by the Bridge for the deposit.
    pub treasury_fee: Amount,

    /// The Bridge's maximum sweep transaction fee.
    pub deposit_tx_max_fee: Amount,

    /// The Vault's optimistic minting fee divisor. Zero disables the minting fee.
    pub minting_fee_divisor: U256,
}

/// The intermediate values of a fee computation, all with 18 decimals of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    /// The deposited amount net of the treasury fee.
    pub net_scaled: U256,

    /// The optimistic minting fee.
    pub minting_fee: U256,

    /// The maximum sweep transaction fee.
    pub deposit_tx_max_fee_scaled: U256,

    /// The amount to mint.
    pub tbtc_amount: U256,
}

/// Scales an amount with 8 decimals of precision to one with 18 decimals of precision.
pub fn to_token_precision(amount: Amount) -> U256 {
    // at most (2^64 - 1) * 10^10 which is well within 256 bits
    U256::from(amount.to_sat()) * U256::from(SATOSHI_MULTIPLIER)
}

/// Computes the amount to mint along with the fees that were deducted.
pub fn fee_breakdown(inputs: &FeeInputs) -> FeeResult<FeeBreakdown> {
    let amount_scaled = to_token_precision(inputs.amount);
    let treasury_fee_scaled = to_token_precision(inputs.treasury_fee);

    let net_scaled = checked_sub(amount_scaled, treasury_fee_scaled)?;

    let minting_fee = if inputs.minting_fee_divisor == U256::ZERO {
        U256::ZERO
    } else {
        net_scaled / inputs.minting_fee_divisor
    };

    let deposit_tx_max_fee_scaled = to_token_precision(inputs.deposit_tx_max_fee);

    let after_minting_fee = checked_sub(net_scaled, minting_fee)?;
    let tbtc_amount = checked_sub(after_minting_fee, deposit_tx_max_fee_scaled)?;

    Ok(FeeBreakdown {
        net_scaled,
        minting_fee,
        deposit_tx_max_fee_scaled,
        tbtc_amount,
    })
}

/// Computes the amount of the pegged token to mint for a deposit.
///
/// See the [module-level docs](self) for the formula.
pub fn calculate_tbtc_amount(inputs: &FeeInputs) -> FeeResult<U256> {
    fee_breakdown(inputs).map(|breakdown| breakdown.tbtc_amount)
}

fn checked_sub(minuend: U256, subtrahend: U256) -> FeeResult<U256> {
    minuend
        .checked_sub(subtrahend)
        .ok_or(FeeError::ArithmeticUnderflow {
            minuend,
            subtrahend,
        })
}

//! Constants shared by all the crates in the workspace.

/// Multiplier that converts an amount with 8 decimals of precision (satoshis) into an amount with
/// 18 decimals of precision (the precision of the pegged token).
pub const SATOSHI_MULTIPLIER: u64 = 10_u64.pow(10);

/// Number of bytes in an [`Address`](crate::types::Address).
pub const ADDRESS_LEN: usize = 20;

/// Number of bytes in the opaque [`ExtraData`](crate::types::ExtraData) payload.
pub const EXTRA_DATA_LEN: usize = 32;

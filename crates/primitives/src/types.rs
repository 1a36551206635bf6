//! Identifiers and opaque payloads used throughout the deposit lifecycle.

use std::{fmt, str::FromStr};

use ethnum::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    constants::{ADDRESS_LEN, EXTRA_DATA_LEN},
    errors::ParseAddressError,
};

/// The address of an account on the ledger where the pegged token lives.
///
/// This is used to identify the Bridge and the Vault collaborators. It is rendered as a
/// `0x`-prefixed hex string in human-readable formats.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address, which never identifies a valid collaborator.
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Creates a new address from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the address.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Whether this is the all-zero address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(value: [u8; ADDRESS_LEN]) -> Self {
        Self(value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;

        let actual = bytes.len();
        let bytes = <[u8; ADDRESS_LEN]>::try_from(bytes).map_err(|_| {
            ParseAddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual,
            }
        })?;

        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Opaque caller-defined metadata supplied when a deposit is revealed.
///
/// The depositor never interprets this payload; it is handed to the finalization hook as-is.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtraData([u8; EXTRA_DATA_LEN]);

impl ExtraData {
    /// Creates a new payload from raw bytes.
    pub const fn new(bytes: [u8; EXTRA_DATA_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the payload.
    pub const fn as_bytes(&self) -> &[u8; EXTRA_DATA_LEN] {
        &self.0
    }
}

impl From<[u8; EXTRA_DATA_LEN]> for ExtraData {
    fn from(value: [u8; EXTRA_DATA_LEN]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ExtraData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtraData(0x{})", hex::encode(self.0))
    }
}

/// The canonical identifier of a single deposit.
///
/// This is the big-endian encoding of a 256-bit unsigned integer derived from the funding
/// transaction and the index of the funding output. See
/// [`deposit_key`](crate::deposit_key::deposit_key) for how it is computed.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DepositKey([u8; 32]);

impl DepositKey {
    /// Creates a deposit key from its big-endian byte representation.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the big-endian byte representation of the key.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Interprets the key as an unsigned 256-bit integer.
    pub fn to_u256(&self) -> U256 {
        U256::from_be_bytes(self.0)
    }
}

impl From<[u8; 32]> for DepositKey {
    fn from(value: [u8; 32]) -> Self {
        Self(value)
    }
}

impl From<U256> for DepositKey {
    fn from(value: U256) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<DepositKey> for U256 {
    fn from(value: DepositKey) -> Self {
        value.to_u256()
    }
}

impl fmt::Display for DepositKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for DepositKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepositKey({self})")
    }
}

//! Column-level types used to map the depositor's types to SQLite types.

use std::ops::Deref;

use sqlx::Sqlite;
use tbtc_depositor_primitives::types::DepositKey;

/// A [`DepositKey`] stored as lowercase hex `TEXT`.
///
/// All keys have the same length so the lexicographic order of the column matches the numeric
/// order of the keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DbDepositKey(DepositKey);

impl Deref for DbDepositKey {
    type Target = DepositKey;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DepositKey> for DbDepositKey {
    fn from(value: DepositKey) -> Self {
        Self(value)
    }
}

impl sqlx::Type<Sqlite> for DbDepositKey {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, Sqlite> for DbDepositKey {
    fn decode(
        value: <Sqlite as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let key_hex: String = sqlx::decode::Decode::<'r, Sqlite>::decode(value)?;

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&key_hex, &mut bytes)
            .map_err(|e| sqlx::Error::Decode(format!("invalid deposit key: {e}").into()))?;

        Ok(DbDepositKey(DepositKey::new(bytes)))
    }
}

impl<'q> sqlx::Encode<'q, Sqlite> for DbDepositKey {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        let key_hex = hex::encode(self.0.as_bytes());

        sqlx::Encode::<'q, Sqlite>::encode_by_ref(&key_hex, buf)
    }
}

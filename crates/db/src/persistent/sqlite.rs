//! SQLite implementation of the persistent storage layer.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tbtc_depositor_primitives::types::DepositKey;
use tracing::{debug, info};

use super::{errors::StorageError, types::DbDepositKey};
use crate::{errors::DbResult, registry::DepositRegistry};

/// Registry of pending deposits persisted in a SQLite database.
///
/// Each pending deposit is a row in the `pending_deposits` table; the absence of a row means the
/// deposit is not pending.
#[derive(Debug, Clone)]
pub struct SqliteDb {
    pool: SqlitePool,
}

impl SqliteDb {
    /// Creates a new handle over the provided pool.
    ///
    /// The schema is expected to be in place already; see [`Self::migrate`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Applies the schema migrations bundled with this crate.
    pub async fn migrate(&self) -> DbResult<()> {
        info!(action = "running migrations");

        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[async_trait]
impl DepositRegistry for SqliteDb {
    async fn mark_pending(&self, deposit_key: DepositKey) -> DbResult<bool> {
        let db_key = DbDepositKey::from(deposit_key);

        let result = sqlx::query("INSERT OR IGNORE INTO pending_deposits (deposit_key) VALUES ($1)")
            .bind(db_key)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let inserted = result.rows_affected() == 1;
        debug!(%deposit_key, %inserted, "marked deposit as pending");

        Ok(inserted)
    }

    async fn is_pending(&self, deposit_key: DepositKey) -> DbResult<bool> {
        let db_key = DbDepositKey::from(deposit_key);

        let row = sqlx::query("SELECT deposit_key FROM pending_deposits WHERE deposit_key = $1")
            .bind(db_key)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.is_some())
    }

    async fn clear_pending(&self, deposit_key: DepositKey) -> DbResult<bool> {
        let db_key = DbDepositKey::from(deposit_key);

        let result = sqlx::query("DELETE FROM pending_deposits WHERE deposit_key = $1")
            .bind(db_key)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let removed = result.rows_affected() == 1;
        debug!(%deposit_key, %removed, "cleared pending deposit");

        Ok(removed)
    }

    async fn pending_deposits(&self) -> DbResult<Vec<DepositKey>> {
        let keys = sqlx::query_scalar::<_, DbDepositKey>(
            "SELECT deposit_key FROM pending_deposits ORDER BY deposit_key",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::from)?;

        Ok(keys.into_iter().map(|key| *key).collect())
    }
}

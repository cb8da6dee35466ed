//! Account status transitions.
//!
//! `account_status` holds the current flags of each account and
//! `account_status_history` one row per transition. A transition writes both
//! in one transaction, so the newest history row always equals the current row.

use crate::db::models::{AccountStatus, StatusHistoryEntry};
use crate::db::sqlite::EduStore;
use crate::error::EduError;
use crate::types::StatusChange;
use chrono::Utc;
use tracing::{debug, info};

impl EduStore {
    /// Get-or-create the current status row for an existing account.
    ///
    /// The conditional insert commits on its own before the read, and is a
    /// no-op when the row is already there. Fails with `NotFound` (and writes
    /// nothing) when the account does not exist.
    pub async fn ensure_account_status(&self, account_id: i64) -> Result<AccountStatus, EduError> {
        let created = sqlx::query(
            "INSERT INTO account_status (account_id, aadhaar_linked, dbt_enabled, last_updated)
             SELECT account_id, 0, 0, ? FROM bank_accounts WHERE account_id = ?
             ON CONFLICT(account_id) DO NOTHING",
        )
        .bind(Utc::now())
        .bind(account_id)
        .execute(self.pool())
        .await?
        .rows_affected();
        if created > 0 {
            info!(account_id, "materialized missing account status row");
        }

        sqlx::query_as(
            "SELECT account_id, aadhaar_linked, dbt_enabled, last_updated
             FROM account_status WHERE account_id = ?",
        )
        .bind(account_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(EduError::not_found("bank account", account_id))
    }

    /// Apply a status change and append the matching history row atomically.
    ///
    /// Omitted flags keep their committed value. A change with no flags still
    /// appends a history row carrying the unchanged values.
    pub async fn update_account_status(
        &self,
        change: StatusChange,
    ) -> Result<AccountStatus, EduError> {
        self.ensure_account_status(change.account_id).await?;

        let now = Utc::now();
        let mut tx = self.pool().begin().await?;

        // Single read-modify-write statement: it takes the write lock before
        // reading, so same-account transitions see each other's committed result.
        let updated: Option<AccountStatus> = sqlx::query_as(
            "UPDATE account_status
             SET aadhaar_linked = COALESCE(?, aadhaar_linked),
                 dbt_enabled = COALESCE(?, dbt_enabled),
                 last_updated = ?
             WHERE account_id = ?
             RETURNING account_id, aadhaar_linked, dbt_enabled, last_updated",
        )
        .bind(change.aadhaar_linked)
        .bind(change.dbt_enabled)
        .bind(now)
        .bind(change.account_id)
        .fetch_optional(&mut *tx)
        .await?;

        // Account deleted between the ensure step and here; dropping `tx` rolls back.
        let Some(status) = updated else {
            return Err(EduError::not_found("bank account", change.account_id));
        };

        sqlx::query(
            "INSERT INTO account_status_history (account_id, aadhaar_linked, dbt_enabled, changed_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(status.account_id)
        .bind(status.aadhaar_linked)
        .bind(status.dbt_enabled)
        .bind(status.last_updated)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if change.is_noop() {
            debug!(account_id = status.account_id, "status change without flags recorded");
        }
        info!(
            account_id = status.account_id,
            aadhaar_linked = status.aadhaar_linked,
            dbt_enabled = status.dbt_enabled,
            "account status updated and history recorded"
        );
        Ok(status)
    }

    /// History rows of one account, oldest first.
    pub async fn status_history(
        &self,
        account_id: i64,
    ) -> Result<Vec<StatusHistoryEntry>, EduError> {
        if !self.bank_account_exists(account_id).await? {
            return Err(EduError::not_found("bank account", account_id));
        }
        let rows = sqlx::query_as(
            "SELECT history_id, account_id, aadhaar_linked, dbt_enabled, changed_at
             FROM account_status_history
             WHERE account_id = ?
             ORDER BY history_id",
        )
        .bind(account_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}

use crate::db::models::BankAccountView;
use crate::db::sqlite::EduStore;
use crate::error::EduError;
use crate::types::BankAccountInput;
use chrono::Utc;
use tracing::info;

impl EduStore {
    /// Inserts the account and its default (both flags false) status row in
    /// one transaction. Returns the new `account_id`.
    pub async fn insert_bank_account(&self, input: &BankAccountInput) -> Result<i64, EduError> {
        let mut tx = self.pool().begin().await?;

        let (account_id,): (i64,) = sqlx::query_as(
            "INSERT INTO bank_accounts (student_id, account_number, bank_name)
             VALUES (?, ?, ?)
             RETURNING account_id",
        )
        .bind(input.student_id)
        .bind(&input.account_number)
        .bind(&input.bank_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            EduError::from(e)
                .on_conflict("account number already exists")
                .on_foreign_key(format!("student {} does not exist", input.student_id))
        })?;

        sqlx::query(
            "INSERT INTO account_status (account_id, aadhaar_linked, dbt_enabled, last_updated)
             VALUES (?, 0, 0, ?)",
        )
        .bind(account_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(account_id, student_id = input.student_id, "inserted bank account");
        Ok(account_id)
    }

    pub async fn list_bank_accounts(&self) -> Result<Vec<BankAccountView>, EduError> {
        let rows = sqlx::query_as(
            "SELECT ba.account_id, ba.account_number, ba.bank_name, s.student_id, s.name,
                    COALESCE(st.aadhaar_linked, 0) AS aadhaar_linked,
                    COALESCE(st.dbt_enabled, 0) AS dbt_enabled,
                    st.last_updated
             FROM bank_accounts ba
             JOIN students s ON s.student_id = ba.student_id
             LEFT JOIN account_status st ON st.account_id = ba.account_id
             ORDER BY ba.account_id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub(crate) async fn bank_account_exists(&self, account_id: i64) -> Result<bool, EduError> {
        let found: Option<(i64,)> =
            sqlx::query_as("SELECT account_id FROM bank_accounts WHERE account_id = ?")
                .bind(account_id)
                .fetch_optional(self.pool())
                .await?;
        Ok(found.is_some())
    }

    /// Deletes the account together with its status row and history.
    pub async fn delete_bank_account(&self, account_id: i64) -> Result<(), EduError> {
        let result = sqlx::query("DELETE FROM bank_accounts WHERE account_id = ?")
            .bind(account_id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(EduError::not_found("bank account", account_id));
        }
        info!(account_id, "deleted bank account");
        Ok(())
    }
}

use crate::db::models::AwarenessContent;
use crate::db::sqlite::EduStore;
use crate::error::EduError;
use crate::types::AwarenessInput;
use chrono::Utc;
use tracing::info;

impl EduStore {
    pub async fn insert_awareness(
        &self,
        input: &AwarenessInput,
    ) -> Result<AwarenessContent, EduError> {
        let row: AwarenessContent = sqlx::query_as(
            "INSERT INTO awareness_content (title, content, created_at) VALUES (?, ?, ?)
             RETURNING content_id, title, content, created_at",
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(Utc::now())
        .fetch_one(self.pool())
        .await?;
        info!(content_id = row.content_id, "inserted awareness content");
        Ok(row)
    }

    pub async fn list_awareness(&self) -> Result<Vec<AwarenessContent>, EduError> {
        let rows = sqlx::query_as(
            "SELECT content_id, title, content, created_at
             FROM awareness_content ORDER BY content_id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn get_awareness(&self, content_id: i64) -> Result<AwarenessContent, EduError> {
        sqlx::query_as(
            "SELECT content_id, title, content, created_at
             FROM awareness_content WHERE content_id = ?",
        )
        .bind(content_id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(EduError::not_found("awareness content", content_id))
    }

    /// Replaces title and body; `created_at` is left as is.
    pub async fn update_awareness(
        &self,
        content_id: i64,
        input: &AwarenessInput,
    ) -> Result<(), EduError> {
        let result =
            sqlx::query("UPDATE awareness_content SET title = ?, content = ? WHERE content_id = ?")
                .bind(&input.title)
                .bind(&input.content)
                .bind(content_id)
                .execute(self.pool())
                .await?;
        if result.rows_affected() == 0 {
            return Err(EduError::not_found("awareness content", content_id));
        }
        info!(content_id, "updated awareness content");
        Ok(())
    }

    pub async fn delete_awareness(&self, content_id: i64) -> Result<(), EduError> {
        let result = sqlx::query("DELETE FROM awareness_content WHERE content_id = ?")
            .bind(content_id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(EduError::not_found("awareness content", content_id));
        }
        info!(content_id, "deleted awareness content");
        Ok(())
    }
}

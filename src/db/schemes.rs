use crate::db::models::Scheme;
use crate::db::sqlite::EduStore;
use crate::error::EduError;
use crate::types::SchemeInput;
use tracing::info;

impl EduStore {
    pub async fn insert_scheme(&self, input: &SchemeInput) -> Result<Scheme, EduError> {
        let scheme: Scheme = sqlx::query_as(
            "INSERT INTO schemes (scheme_name, department) VALUES (?, ?)
             RETURNING scheme_id, scheme_name, department",
        )
        .bind(&input.scheme_name)
        .bind(&input.department)
        .fetch_one(self.pool())
        .await?;
        info!(scheme_id = scheme.scheme_id, "inserted scheme");
        Ok(scheme)
    }

    pub async fn list_schemes(&self) -> Result<Vec<Scheme>, EduError> {
        let rows = sqlx::query_as(
            "SELECT scheme_id, scheme_name, department FROM schemes ORDER BY scheme_id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    pub async fn get_scheme(&self, scheme_id: i64) -> Result<Scheme, EduError> {
        sqlx::query_as("SELECT scheme_id, scheme_name, department FROM schemes WHERE scheme_id = ?")
            .bind(scheme_id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(EduError::not_found("scheme", scheme_id))
    }

    pub async fn update_scheme(&self, scheme_id: i64, input: &SchemeInput) -> Result<(), EduError> {
        let result =
            sqlx::query("UPDATE schemes SET scheme_name = ?, department = ? WHERE scheme_id = ?")
                .bind(&input.scheme_name)
                .bind(&input.department)
                .bind(scheme_id)
                .execute(self.pool())
                .await?;
        if result.rows_affected() == 0 {
            return Err(EduError::not_found("scheme", scheme_id));
        }
        info!(scheme_id, "updated scheme");
        Ok(())
    }

    pub async fn delete_scheme(&self, scheme_id: i64) -> Result<(), EduError> {
        let result = sqlx::query("DELETE FROM schemes WHERE scheme_id = ?")
            .bind(scheme_id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(EduError::not_found("scheme", scheme_id));
        }
        info!(scheme_id, "deleted scheme");
        Ok(())
    }
}

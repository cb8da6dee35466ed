use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum EduError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(SqlxError),

    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EduError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        EduError::NotFound { entity, id }
    }

    /// Replace the raw driver message of a `Conflict` with a caller-facing one.
    pub(crate) fn on_conflict(self, message: &str) -> Self {
        match self {
            EduError::Conflict(_) => EduError::Conflict(message.to_string()),
            other => other,
        }
    }

    /// Replace the raw driver message of a `ForeignKeyViolation`.
    pub(crate) fn on_foreign_key(self, message: impl Into<String>) -> Self {
        match self {
            EduError::ForeignKeyViolation(_) => EduError::ForeignKeyViolation(message.into()),
            other => other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EduError::Validation(_) => "VALIDATION_ERROR",
            EduError::Conflict(_) => "CONFLICT",
            EduError::NotFound { .. } => "NOT_FOUND",
            EduError::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            EduError::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            EduError::DatabaseError(_) | EduError::Config(_) | EduError::Io(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<SqlxError> for EduError {
    fn from(e: SqlxError) -> Self {
        let classified = match &e {
            SqlxError::Database(db) => {
                let message = db.message().to_string();
                match db.kind() {
                    ErrorKind::UniqueViolation => Some(EduError::Conflict(message)),
                    ErrorKind::ForeignKeyViolation => Some(EduError::ForeignKeyViolation(message)),
                    ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                        Some(EduError::Validation(message))
                    }
                    _ => None,
                }
            }
            SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
                Some(EduError::StoreUnavailable(e.to_string()))
            }
            _ => None,
        };
        classified.unwrap_or(EduError::DatabaseError(e))
    }
}

impl From<figment::Error> for EduError {
    fn from(e: figment::Error) -> Self {
        EduError::Config(Box::new(e))
    }
}

impl IntoResponse for EduError {
    fn into_response(self) -> axum::response::Response {
        let code = self.code().to_string();
        let (status, message) = match &self {
            EduError::Validation(_) | EduError::ForeignKeyViolation(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            EduError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            EduError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            EduError::StoreUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "The database is not available.".to_string(),
            ),
            EduError::DatabaseError(_) | EduError::Config(_) | EduError::Io(_) => {
                tracing::error!(error = %self, "request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        let body = ApiErrorBody { code, message };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

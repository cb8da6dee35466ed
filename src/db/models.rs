use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub state: String,
    pub college: Option<String>,
}

/// A bank account joined with its owner and current flags.
/// Accounts without a status row report both flags as `false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct BankAccountView {
    pub account_id: i64,
    pub account_number: String,
    pub bank_name: String,
    pub student_id: i64,
    pub name: String,
    pub aadhaar_linked: bool,
    pub dbt_enabled: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Current status of one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct AccountStatus {
    pub account_id: i64,
    pub aadhaar_linked: bool,
    pub dbt_enabled: bool,
    pub last_updated: DateTime<Utc>,
}

/// One row of the append-only status log; values are the ones written, not the ones replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct StatusHistoryEntry {
    pub history_id: i64,
    pub account_id: i64,
    pub aadhaar_linked: bool,
    pub dbt_enabled: bool,
    pub changed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Scheme {
    pub scheme_id: i64,
    pub scheme_name: String,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct AwarenessContent {
    pub content_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

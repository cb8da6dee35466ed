use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;

use crate::db::{AccountStatus, BankAccountView, StatusHistoryEntry};
use crate::handlers::Ack;
use crate::middleware::{ValidJson, ValidPath};
use crate::types::{BankAccountInput, StatusChange};
use crate::{EduError, router::AppState};

#[derive(Debug, Serialize)]
pub struct CreatedAccount {
    pub account_id: i64,
}

/// POST /bank-accounts
pub async fn create_bank_account(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<BankAccountInput>,
) -> Result<(StatusCode, Json<CreatedAccount>), EduError> {
    let account_id = state.store.insert_bank_account(&payload).await?;
    Ok((StatusCode::CREATED, Json(CreatedAccount { account_id })))
}

/// GET /bank-accounts
pub async fn list_bank_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BankAccountView>>, EduError> {
    Ok(Json(state.store.list_bank_accounts().await?))
}

/// DELETE /bank-accounts/{account_id}
pub async fn delete_bank_account(
    State(state): State<AppState>,
    ValidPath(account_id): ValidPath<i64>,
) -> Result<Json<Ack>, EduError> {
    state.store.delete_bank_account(account_id).await?;
    Ok(Json(Ack::DELETED))
}

/// PUT /account-status
pub async fn update_account_status(
    State(state): State<AppState>,
    ValidJson(change): ValidJson<StatusChange>,
) -> Result<Json<AccountStatus>, EduError> {
    Ok(Json(state.store.update_account_status(change).await?))
}

/// GET /account-status/{account_id}
///
/// Creates the default (all false) row if the account has none yet.
pub async fn get_account_status(
    State(state): State<AppState>,
    ValidPath(account_id): ValidPath<i64>,
) -> Result<Json<AccountStatus>, EduError> {
    Ok(Json(state.store.ensure_account_status(account_id).await?))
}

/// GET /account-status/{account_id}/history
pub async fn get_status_history(
    State(state): State<AppState>,
    ValidPath(account_id): ValidPath<i64>,
) -> Result<Json<Vec<StatusHistoryEntry>>, EduError> {
    Ok(Json(state.store.status_history(account_id).await?))
}

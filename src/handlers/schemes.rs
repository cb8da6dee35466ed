use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::db::Scheme;
use crate::handlers::Ack;
use crate::middleware::{ValidJson, ValidPath};
use crate::types::SchemeInput;
use crate::{EduError, router::AppState};

pub async fn create_scheme(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SchemeInput>,
) -> Result<(StatusCode, Json<Scheme>), EduError> {
    let scheme = state.store.insert_scheme(&payload).await?;
    Ok((StatusCode::CREATED, Json(scheme)))
}

pub async fn list_schemes(State(state): State<AppState>) -> Result<Json<Vec<Scheme>>, EduError> {
    Ok(Json(state.store.list_schemes().await?))
}

pub async fn update_scheme(
    State(state): State<AppState>,
    ValidPath(scheme_id): ValidPath<i64>,
    ValidJson(payload): ValidJson<SchemeInput>,
) -> Result<Json<Ack>, EduError> {
    state.store.update_scheme(scheme_id, &payload).await?;
    Ok(Json(Ack::OK))
}

pub async fn delete_scheme(
    State(state): State<AppState>,
    ValidPath(scheme_id): ValidPath<i64>,
) -> Result<Json<Ack>, EduError> {
    state.store.delete_scheme(scheme_id).await?;
    Ok(Json(Ack::DELETED))
}

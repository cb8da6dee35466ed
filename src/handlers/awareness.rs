use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::db::AwarenessContent;
use crate::handlers::Ack;
use crate::middleware::{ValidJson, ValidPath};
use crate::types::AwarenessInput;
use crate::{EduError, router::AppState};

pub async fn create_awareness(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AwarenessInput>,
) -> Result<(StatusCode, Json<AwarenessContent>), EduError> {
    let content = state.store.insert_awareness(&payload).await?;
    Ok((StatusCode::CREATED, Json(content)))
}

pub async fn list_awareness(
    State(state): State<AppState>,
) -> Result<Json<Vec<AwarenessContent>>, EduError> {
    Ok(Json(state.store.list_awareness().await?))
}

pub async fn update_awareness(
    State(state): State<AppState>,
    ValidPath(content_id): ValidPath<i64>,
    ValidJson(payload): ValidJson<AwarenessInput>,
) -> Result<Json<Ack>, EduError> {
    state.store.update_awareness(content_id, &payload).await?;
    Ok(Json(Ack::OK))
}

pub async fn delete_awareness(
    State(state): State<AppState>,
    ValidPath(content_id): ValidPath<i64>,
) -> Result<Json<Ack>, EduError> {
    state.store.delete_awareness(content_id).await?;
    Ok(Json(Ack::DELETED))
}

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::EduError;
use crate::handlers::Ack;
use crate::router::AppState;

/// GET /health -> 200 when a trivial query succeeds, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => Json(Ack::OK).into_response(),
        Err(e) => {
            warn!(error = %e, "health probe failed");
            EduError::StoreUnavailable(e.to_string()).into_response()
        }
    }
}

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::db::Student;
use crate::handlers::Ack;
use crate::middleware::{ValidJson, ValidPath};
use crate::types::StudentInput;
use crate::{EduError, router::AppState};

/// POST /students
pub async fn create_student(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<StudentInput>,
) -> Result<(StatusCode, Json<Student>), EduError> {
    let student = state.store.insert_student(&payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /students
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, EduError> {
    Ok(Json(state.store.list_students().await?))
}

/// GET /students/pending-dbt
pub async fn list_pending_dbt(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, EduError> {
    Ok(Json(state.store.students_pending_dbt().await?))
}

/// PUT /students/{student_id}
pub async fn update_student(
    State(state): State<AppState>,
    ValidPath(student_id): ValidPath<i64>,
    ValidJson(payload): ValidJson<StudentInput>,
) -> Result<Json<Ack>, EduError> {
    state.store.update_student(student_id, &payload).await?;
    Ok(Json(Ack::UPDATED))
}

/// DELETE /students/{student_id}
pub async fn delete_student(
    State(state): State<AppState>,
    ValidPath(student_id): ValidPath<i64>,
) -> Result<Json<Ack>, EduError> {
    state.store.delete_student(student_id).await?;
    Ok(Json(Ack::DELETED))
}

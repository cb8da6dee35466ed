use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::db::EduStore;
use crate::handlers::{accounts, awareness, health, schemes, students};

#[derive(Clone)]
pub struct AppState {
    pub store: EduStore,
}

impl AppState {
    pub fn new(store: EduStore) -> Self {
        Self { store }
    }
}

pub fn edu_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route("/students/pending-dbt", get(students::list_pending_dbt))
        .route(
            "/students/{student_id}",
            put(students::update_student).delete(students::delete_student),
        )
        .route(
            "/bank-accounts",
            get(accounts::list_bank_accounts).post(accounts::create_bank_account),
        )
        .route(
            "/bank-accounts/{account_id}",
            delete(accounts::delete_bank_account),
        )
        .route("/account-status", put(accounts::update_account_status))
        .route(
            "/account-status/{account_id}",
            get(accounts::get_account_status),
        )
        .route(
            "/account-status/{account_id}/history",
            get(accounts::get_status_history),
        )
        .route(
            "/schemes",
            get(schemes::list_schemes).post(schemes::create_scheme),
        )
        .route(
            "/schemes/{scheme_id}",
            put(schemes::update_scheme).delete(schemes::delete_scheme),
        )
        .route(
            "/awareness",
            get(awareness::list_awareness).post(awareness::create_awareness),
        )
        .route(
            "/awareness/{content_id}",
            put(awareness::update_awareness).delete(awareness::delete_awareness),
        )
        .with_state(state)
}

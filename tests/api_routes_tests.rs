mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use common::TestDb;
use edudbt::router::{AppState, edu_router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let resp = app.clone().oneshot(request).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };
    (status, value)
}

async fn app(label: &str) -> (TestDb, Router) {
    let db = TestDb::new(label).await;
    let router = edu_router(AppState::new(db.store.clone()));
    (db, router)
}

#[tokio::test]
async fn health_reports_ok_then_unavailable_after_close() {
    let (db, app) = app("api-health").await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    db.store.close().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn student_create_list_and_duplicate_email() {
    let (_db, app) = app("api-students").await;

    let payload = json!({"name": "Asha", "email": "asha@example.com", "state": "KA"});
    let (status, body) = send(&app, "POST", "/students", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["student_id"], 1);
    assert_eq!(body["email"], "asha@example.com");
    assert_eq!(body["college"], Value::Null);

    let (status, body) = send(&app, "POST", "/students", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_student_payloads_are_rejected_before_writing() {
    let (_db, app) = app("api-validation").await;

    let (status, body) = send(&app, "POST", "/students", Some(json!({"name": "No State"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let bad_email = json!({"name": "A", "state": "KA", "email": "not-an-email"});
    let (status, _) = send(&app, "POST", "/students", Some(bad_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn bank_account_errors_map_to_400_and_409() {
    let (_db, app) = app("api-accounts").await;

    let (status, _) = send(
        &app,
        "POST",
        "/bank-accounts",
        Some(json!({"account_number": "ACC123", "bank_name": "SBI"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/bank-accounts",
        Some(json!({"student_id": 42, "account_number": "ACC123", "bank_name": "SBI"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "FOREIGN_KEY_VIOLATION");

    send(&app, "POST", "/students", Some(json!({"name": "Asha", "state": "KA"}))).await;
    let account = json!({"student_id": 1, "account_number": "ACC123", "bank_name": "SBI"});
    let (status, body) = send(&app, "POST", "/bank-accounts", Some(account.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"account_id": 1}));

    let (status, _) = send(&app, "POST", "/bank-accounts", Some(account)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, "GET", "/bank-accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["account_number"], "ACC123");
    assert_eq!(body[0]["name"], "Asha");
    assert_eq!(body[0]["aadhaar_linked"], false);
    assert_eq!(body[0]["dbt_enabled"], false);
}

#[tokio::test]
async fn account_status_flow_and_pending_dbt() {
    let (_db, app) = app("api-status").await;

    send(&app, "POST", "/students", Some(json!({"name": "Asha", "state": "KA"}))).await;
    send(&app, "POST", "/students", Some(json!({"name": "Ravi", "state": "TN"}))).await;
    send(
        &app,
        "POST",
        "/bank-accounts",
        Some(json!({"student_id": 1, "account_number": "ACC123", "bank_name": "SBI"})),
    )
    .await;

    let (_, pending) = send(&app, "GET", "/students/pending-dbt", None).await;
    assert_eq!(pending.as_array().unwrap().len(), 2);

    let (status, body) = send(
        &app,
        "PUT",
        "/account-status",
        Some(json!({"account_id": 1, "dbt_enabled": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account_id"], 1);
    assert_eq!(body["aadhaar_linked"], false);
    assert_eq!(body["dbt_enabled"], true);

    let (_, pending) = send(&app, "GET", "/students/pending-dbt", None).await;
    let pending = pending.as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["name"], "Ravi");

    let (status, history) = send(&app, "GET", "/account-status/1/history", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["dbt_enabled"], true);

    let (status, current) = send(&app, "GET", "/account-status/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["last_updated"], history[0]["changed_at"]);

    let (status, body) = send(
        &app,
        "PUT",
        "/account-status",
        Some(json!({"account_id": 77, "aadhaar_linked": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn updates_and_deletes_return_404_for_unknown_ids() {
    let (_db, app) = app("api-not-found").await;

    let student = json!({"name": "X", "state": "KA"});
    let scheme = json!({"scheme_name": "PM-Scholarship"});
    let content = json!({"title": "Link Aadhaar", "content": "Visit your branch"});

    for (uri, body) in [
        ("/students/9", student),
        ("/schemes/9", scheme),
        ("/awareness/9", content),
    ] {
        let (status, _) = send(&app, "PUT", uri, Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
        let (status, _) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
    }
}

#[tokio::test]
async fn scheme_and_awareness_crud() {
    let (_db, app) = app("api-crud").await;

    let (status, body) = send(
        &app,
        "POST",
        "/schemes",
        Some(json!({"scheme_name": "Post-Matric", "department": "Social Welfare"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["scheme_id"], 1);

    let (status, body) = send(
        &app,
        "PUT",
        "/schemes/1",
        Some(json!({"scheme_name": "Post-Matric 2.0"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (_, schemes) = send(&app, "GET", "/schemes", None).await;
    assert_eq!(schemes[0]["scheme_name"], "Post-Matric 2.0");
    assert_eq!(schemes[0]["department"], Value::Null);

    let (status, body) = send(
        &app,
        "POST",
        "/awareness",
        Some(json!({"title": "What is DBT?"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let content_id = body["content_id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/awareness/{content_id}"),
        Some(json!({"title": "What is DBT?", "content": "Direct Benefit Transfer"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "DELETE", &format!("/awareness/{content_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "deleted"}));

    let (status, _) = send(&app, "DELETE", "/schemes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, schemes) = send(&app, "GET", "/schemes", None).await;
    assert_eq!(schemes, json!([]));
}

#[tokio::test]
async fn student_update_and_delete() {
    let (_db, app) = app("api-student-mut").await;

    send(&app, "POST", "/students", Some(json!({"name": "Asha", "phone": "111", "state": "KA"}))).await;
    send(&app, "POST", "/students", Some(json!({"name": "Ravi", "phone": "222", "state": "TN"}))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/students/1",
        Some(json!({"name": "Asha K", "phone": "111", "state": "KA", "college": "IISc"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "updated"}));

    let (status, _) = send(
        &app,
        "PUT",
        "/students/2",
        Some(json!({"name": "Ravi", "phone": "111", "state": "TN"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "DELETE", "/students/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, students) = send(&app, "GET", "/students", None).await;
    assert_eq!(students.as_array().unwrap().len(), 1);
    assert_eq!(students[0]["college"], "IISc");
}

#[tokio::test]
async fn status_change_for_non_positive_account_is_not_found() {
    let (_db, app) = app("api-status-ids").await;

    for account_id in [0, -5] {
        let (status, body) = send(
            &app,
            "PUT",
            "/account-status",
            Some(json!({"account_id": account_id, "dbt_enabled": true})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "account_id {account_id}");
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn non_numeric_path_ids_get_json_validation_errors() {
    let (_db, app) = app("api-path-ids").await;

    for (method, uri) in [
        ("DELETE", "/students/abc"),
        ("DELETE", "/bank-accounts/x1"),
        ("GET", "/account-status/abc"),
        ("GET", "/account-status/abc/history"),
        ("DELETE", "/schemes/1.5"),
        ("DELETE", "/awareness/abc"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR", "{method} {uri}");
    }
}

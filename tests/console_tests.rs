mod common;

use common::{TestDb, count};
use edudbt::console::Console;

/// Feed `script` to the menu and return everything it printed.
async fn run_script(db: &TestDb, script: &str) -> String {
    let mut console = Console::new(db.store.clone(), script.as_bytes(), Vec::new());
    console.run().await.expect("console loop failed");
    String::from_utf8(console.into_output()).expect("console output was not utf-8")
}

#[tokio::test]
async fn insert_and_show_student() {
    let db = TestDb::new("console-student").await;

    // name, email, phone, state, college
    let out = run_script(&db, "1\nAsha\n\n\nKA\n\n4\n0\n").await;
    assert!(out.contains("Inserted student id: 1"));
    assert!(out.contains("ID: 1 Name: Asha Email: - Phone: - State: KA College: -"));
    assert!(out.trim_end().ends_with("Exiting."));
}

#[tokio::test]
async fn status_update_through_menu_records_history() {
    let db = TestDb::new("console-status").await;

    let script = concat!(
        "1\nAsha\n\n\nKA\n\n",     // student 1
        "2\n1\nACC123\nSBI\n",     // account 1
        "8\n1\n\ny\n",             // keep aadhaar, enable DBT
        "8\n1\ny\n\n",             // link aadhaar, keep DBT
        "5\n",
        "0\n",
    );
    let out = run_script(&db, script).await;

    assert!(out.contains("Inserted bank account id: 1"));
    assert_eq!(
        out.matches("Account status updated and history recorded.").count(),
        2
    );
    assert!(out.contains("AadhaarLinked: true DBT: true"));

    let history = db.store.status_history(1).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!((history[0].aadhaar_linked, history[0].dbt_enabled), (false, true));
    assert_eq!((history[1].aadhaar_linked, history[1].dbt_enabled), (true, true));
}

#[tokio::test]
async fn errors_are_printed_and_the_menu_continues() {
    let db = TestDb::new("console-errors").await;

    let script = concat!(
        "2\n5\nACC9\nSBI\n", // unknown student
        "8\nabc\n",          // bad id
        "8\n42\n",           // unknown account
        "99\n",
        "3\nScholarship\n\n",
        "0\n",
    );
    let out = run_script(&db, script).await;

    assert!(out.contains("Error: Foreign key violation: student 5 does not exist"));
    assert!(out.contains("Error: Validation failed: invalid id"));
    assert!(out.contains("Error: bank account 42 not found"));
    assert!(out.contains("Please enter a valid number."));
    assert!(out.contains("Inserted scheme id: 1"));
    assert_eq!(count(&db.store, "account_status").await, 0);
}

#[tokio::test]
async fn delete_requires_typed_confirmation() {
    let db = TestDb::new("console-delete").await;

    let script = concat!(
        "1\nAsha\n\n\nKA\n\n",
        "11\n1\nno\n",
        "11\n1\nYES\n",
        "4\n",
        "0\n",
    );
    let out = run_script(&db, script).await;

    assert!(out.contains("Abort."));
    assert!(out.contains("Deleted."));
    assert!(out.contains("No students found."));
}

#[tokio::test]
async fn partial_update_keeps_blank_fields() {
    let db = TestDb::new("console-update").await;

    let script = concat!(
        "1\nAsha\nasha@example.com\n\nKA\n\n",
        "7\n1\n\n\n98450\n\nIISc\n",
        "0\n",
    );
    run_script(&db, script).await;

    let s = db.store.get_student(1).await.unwrap();
    assert_eq!(s.name, "Asha");
    assert_eq!(s.email.as_deref(), Some("asha@example.com"));
    assert_eq!(s.phone.as_deref(), Some("98450"));
    assert_eq!(s.state, "KA");
    assert_eq!(s.college.as_deref(), Some("IISc"));
}

#[tokio::test]
async fn awareness_zero_creates_then_updates() {
    let db = TestDb::new("console-awareness").await;

    let script = concat!(
        "10\n0\nWhat is DBT?\nDirect Benefit Transfer\n",
        "10\n1\nDBT basics\n\n",
        "0\n",
    );
    let out = run_script(&db, script).await;
    assert!(out.contains("Inserted content id: 1"));
    assert!(out.contains("Updated awareness content."));

    let c = db.store.get_awareness(1).await.unwrap();
    assert_eq!(c.title, "DBT basics");
    assert_eq!(c.content.as_deref(), Some("Direct Benefit Transfer"));
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let db = TestDb::new("console-eof").await;
    let out = run_script(&db, "6\n").await;
    assert!(out.contains("No pending students."));
    assert!(out.trim_end().ends_with("Exiting."));
}

#![allow(dead_code)]

use edudbt::EduStore;
use edudbt::config::StoreConfig;
use edudbt::types::{BankAccountInput, StudentInput};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

/// A store backed by a unique temporary SQLite file, removed on drop.
pub struct TestDb {
    pub store: EduStore,
    path: PathBuf,
}

impl TestDb {
    pub async fn new(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "edudbt-{label}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let cfg = StoreConfig {
            database_url: format!("sqlite:{}", path.display()),
            max_connections: 8,
            connect_retries: 0,
            ..StoreConfig::default()
        };
        let store = EduStore::connect(&cfg)
            .await
            .expect("failed to open test store");
        Self { store, path }
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = fs::remove_file(format!("{}{}", self.path.display(), suffix));
        }
    }
}

pub fn student(name: &str, state: &str) -> StudentInput {
    StudentInput {
        name: name.to_string(),
        email: None,
        phone: None,
        state: state.to_string(),
        college: None,
    }
}

pub fn account(student_id: i64, number: &str, bank: &str) -> BankAccountInput {
    BankAccountInput {
        student_id,
        account_number: number.to_string(),
        bank_name: bank.to_string(),
    }
}

pub async fn count(store: &EduStore, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(store.pool())
        .await
        .expect("count query failed");
    n
}

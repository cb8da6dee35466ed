//! SQL DDL for the student / bank account / DBT schema.
//! SQLite-first; every statement is idempotent so it runs on each startup.

/// Tables, in dependency order:
/// - `students`: `email` and `phone` UNIQUE but nullable
/// - `bank_accounts`: `account_number` UNIQUE, cascades from `students`
/// - `account_status`: keyed by `account_id`, so one current row per account
/// - `account_status_history`: append-only audit log, cascades from `bank_accounts`
/// - `schemes`, `beneficiaries`, `awareness_content`
///
/// Booleans are stored as INTEGER 0/1; timestamps as text written by the application.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    student_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NULL UNIQUE,
    phone TEXT NULL UNIQUE,
    state TEXT NOT NULL,
    college TEXT NULL
);

CREATE TABLE IF NOT EXISTS bank_accounts (
    account_id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id INTEGER NOT NULL REFERENCES students(student_id) ON DELETE CASCADE,
    account_number TEXT NOT NULL UNIQUE,
    bank_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS account_status (
    account_id INTEGER PRIMARY KEY REFERENCES bank_accounts(account_id) ON DELETE CASCADE,
    aadhaar_linked INTEGER NOT NULL DEFAULT 0,
    dbt_enabled INTEGER NOT NULL DEFAULT 0,
    last_updated TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS account_status_history (
    history_id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id INTEGER NOT NULL REFERENCES bank_accounts(account_id) ON DELETE CASCADE,
    aadhaar_linked INTEGER NOT NULL,
    dbt_enabled INTEGER NOT NULL,
    changed_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS schemes (
    scheme_id INTEGER PRIMARY KEY AUTOINCREMENT,
    scheme_name TEXT NOT NULL,
    department TEXT NULL
);

CREATE TABLE IF NOT EXISTS beneficiaries (
    ben_id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id INTEGER NOT NULL REFERENCES students(student_id) ON DELETE CASCADE,
    scheme_id INTEGER NOT NULL REFERENCES schemes(scheme_id) ON DELETE CASCADE,
    is_beneficiary INTEGER NOT NULL DEFAULT 0,
    date_registered TEXT NULL
);

CREATE TABLE IF NOT EXISTS awareness_content (
    content_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

-- Pending-DBT and per-student lookups.
CREATE INDEX IF NOT EXISTS idx_account_status_aadhaar ON account_status(aadhaar_linked);
CREATE INDEX IF NOT EXISTS idx_account_status_dbt ON account_status(dbt_enabled);
CREATE INDEX IF NOT EXISTS idx_bank_accounts_student ON bank_accounts(student_id);
CREATE INDEX IF NOT EXISTS idx_account_status_history_account ON account_status_history(account_id)
"#;

/// Table names in creation order.
pub const TABLES: &[&str] = &[
    "students",
    "bank_accounts",
    "account_status",
    "account_status_history",
    "schemes",
    "beneficiaries",
    "awareness_content",
];

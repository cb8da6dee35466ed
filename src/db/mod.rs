//! Database module: row models, schema and the store client.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: `EduStore` connection handling
//! - `students.rs`, `accounts.rs`, `schemes.rs`, `awareness.rs`: per-entity CRUD
//! - `status.rs`: account status transitions with audit history

pub mod accounts;
pub mod awareness;
pub mod models;
pub mod schema;
pub mod schemes;
pub mod sqlite;
pub mod status;
pub mod students;

pub use models::{
    AccountStatus, AwarenessContent, BankAccountView, Scheme, StatusHistoryEntry, Student,
};
pub use sqlite::EduStore;

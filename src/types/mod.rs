//! Inbound payloads shared by the HTTP handlers and the console.

pub mod requests;

pub use requests::{
    AwarenessInput, BankAccountInput, SchemeInput, StatusChange, StudentInput, Validate,
};

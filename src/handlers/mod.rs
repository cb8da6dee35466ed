pub mod accounts;
pub mod awareness;
pub mod health;
pub mod schemes;
pub mod students;

use serde::Serialize;

/// Acknowledgement body for mutations that return no row.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub status: &'static str,
}

impl Ack {
    pub const OK: Ack = Ack { status: "ok" };
    pub const UPDATED: Ack = Ack { status: "updated" };
    pub const DELETED: Ack = Ack { status: "deleted" };
}

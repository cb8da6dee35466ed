pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod router;
pub mod types;

pub use db::EduStore;
pub use error::EduError;

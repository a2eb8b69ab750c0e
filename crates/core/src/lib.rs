// Dashboard Core - Contract, Validation & Dispatch
// NO transport dependencies: servers and clients live in their own crates

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

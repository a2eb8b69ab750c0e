//! JSON-RPC API Layer
//!
//! Serves the dashboard contract over JSON-RPC 2.0: each operation is a
//! method named after it, with its input passed as named params.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use jsonrpsee::server::ServerHandle;
pub use server::{RpcServer, RpcServerConfig};

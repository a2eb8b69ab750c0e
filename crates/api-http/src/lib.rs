//! REST API Layer
//!
//! Serves the dashboard contract over plain HTTP: any method + path is handed
//! to the dispatcher, and the contract document is published at
//! `GET /contract`.
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → request logging → CorsLayer

pub mod cors;
pub mod response;
pub mod router;
pub mod server;

pub use cors::cors_layer;
pub use router::{app, AppState};
pub use server::{HttpServer, HttpServerConfig, HttpServerHandle};

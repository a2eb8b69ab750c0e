//! Dashboard SDK - Rust Client Library
//!
//! Typed client for the Dashboard API JSON-RPC endpoint.
//!
//! # Example
//!
//! ```no_run
//! use dashboard_sdk::ContractClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ContractClient::connect("http://127.0.0.1:3002").await?;
//!
//!     match client.hello("bob").await {
//!         Ok(greeting) => println!("{}", greeting.message),
//!         Err(err) => {
//!             if let Some(data) = err.invalid_name_data() {
//!                 println!("rejected name: {}", data.provided_name);
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::ContractClient;
pub use error::{Result, SdkError};
pub use types::{
    ContractDocument, ErrorDoc, FarewellResponse, HealthResponse, HelloInput, HelloOutput,
    HttpMethod, InvalidNameData, OperationDoc, User, UserRole,
};

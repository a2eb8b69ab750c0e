//! Dashboard Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    ContractDocument, FarewellResponse, HealthResponse, HelloOutput, HttpMethod,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde_json::Value;
use std::time::Duration;

/// Dashboard API Client
///
/// Typed access to the contract over JSON-RPC.
///
/// # Example
///
/// ```no_run
/// use dashboard_sdk::ContractClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ContractClient::connect("http://127.0.0.1:3002").await?;
/// let greeting = client.hello("yoo").await?;
/// assert_eq!(greeting.message, "Hello, yoo!");
/// # Ok(())
/// # }
/// ```
pub struct ContractClient {
    client: HttpClient,
}

impl ContractClient {
    /// Connect to the RPC endpoint (e.g., `http://127.0.0.1:3002`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Greet by name
    ///
    /// Fails with kind `INVALID_NAME` (see [`SdkError::invalid_name_data`])
    /// for any name other than `yoo`, and with `BAD_REQUEST` for `woo`.
    pub async fn hello(&self, name: impl Into<String>) -> Result<HelloOutput> {
        let mut params = ObjectParams::new();
        params.insert("name", name.into())?;
        let response: HelloOutput = self.client.request("hello", params).await?;

        Ok(response)
    }

    pub async fn bye(&self) -> Result<FarewellResponse> {
        let response: FarewellResponse = self.client.request("bye", rpc_params![]).await?;

        Ok(response)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response: HealthResponse = self.client.request("health", rpc_params![]).await?;

        Ok(response)
    }

    /// Fetch the self-description document
    pub async fn describe(&self) -> Result<ContractDocument> {
        let response: ContractDocument = self
            .client
            .request("contract.describe", rpc_params![])
            .await?;

        Ok(response)
    }

    /// Route-addressed call, untyped
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        path: impl Into<String>,
        body: Value,
    ) -> Result<Value> {
        let mut params = ObjectParams::new();
        params.insert("method", method)?;
        params.insert("path", path.into())?;
        params.insert("body", body)?;
        let response: Value = self.client.request("contract.dispatch", params).await?;

        Ok(response)
    }
}

//! JSON-RPC Server
//!
//! Exposes every contract operation as a JSON-RPC 2.0 method over HTTP.

use crate::error::malformed_params;
use crate::handler::RpcHandler;
use crate::types::{DESCRIBE_METHOD, DISPATCH_METHOD};
use dashboard_core::application::{ContractDocument, Dispatcher};
use dashboard_core::domain::Request;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "0.0.0.0";
const DEFAULT_RPC_PORT: u16 = 3002;

/// RPC Server Configuration
#[derive(Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsLayer,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            cors: CorsLayer::new(),
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        dispatcher: Arc<Dispatcher>,
        document: Arc<ContractDocument>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(dispatcher, document)),
        }
    }

    /// Method table: one method per operation plus the two contract methods
    pub fn module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        for spec in self.handler.dispatcher().registry().describe() {
            let name = spec.name;
            let handler = self.handler.clone();
            module
                .register_async_method(name, move |params, _, _| {
                    let handler = handler.clone();
                    async move { handler.call(name, params.as_str()).await }
                })
                .map_err(|e| e.to_string())?;
        }

        let handler = self.handler.clone();
        module
            .register_async_method(DISPATCH_METHOD, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: Request = serde_json::from_str(params.as_str().unwrap_or("null"))
                        .map_err(malformed_params)?;
                    handler.dispatch(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_method(DESCRIBE_METHOD, move |_, _, _| handler.describe())
            .map_err(|e| e.to_string())?;

        Ok(module)
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the server handle.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let module = self.module()?;

        let middleware = tower::ServiceBuilder::new().layer(self.config.cors.clone());
        let server = Server::builder()
            .set_http_middleware(middleware)
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read local address: {}", e))?;

        info!(
            addr = %local_addr,
            methods = module.method_names().count(),
            "JSON-RPC server started"
        );

        Ok((local_addr, server.start(module)))
    }
}

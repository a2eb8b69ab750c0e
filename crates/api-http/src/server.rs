//! HTTP Server

use crate::router::{app, AppState};
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 3001;

/// HTTP Server Configuration
#[derive(Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsLayer,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors: CorsLayer::new(),
        }
    }
}

pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

/// Running server; dropping it leaves the server running
pub struct HttpServerHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl HttpServerHandle {
    /// Stop accepting connections and wait for in-flight requests
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            error!(error = %e, "HTTP server task failed");
        }
    }
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind and serve in the background
    ///
    /// Returns the bound address (useful with port 0) and a shutdown handle.
    pub async fn start(self) -> Result<(SocketAddr, HttpServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind HTTP server on {}: {}", addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| format!("Failed to read local address: {}", e))?;

        let router = app(self.state, self.config.cors);
        let (shutdown, signal) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let served = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = signal.await;
                })
                .await;
            if let Err(e) = served {
                error!(error = %e, "HTTP server stopped with error");
            }
        });

        info!(addr = %local_addr, "HTTP server started");
        Ok((local_addr, HttpServerHandle { shutdown, task }))
    }
}

//! Shared fixture: both transports on ephemeral localhost ports

use dashboard_api_http::{cors_layer, AppState, HttpServer, HttpServerConfig, HttpServerHandle};
use dashboard_api_rpc::{RpcServer, RpcServerConfig, ServerHandle};
use dashboard_core::api::TITLE;
use dashboard_core::application::{dashboard_dispatcher, describe};
use dashboard_core::port::{SystemTimeProvider, ThreadRandomSource};
use std::net::SocketAddr;
use std::sync::Arc;

pub struct Backend {
    pub rest_url: String,
    pub rpc_url: String,
    http: HttpServerHandle,
    rpc: ServerHandle,
}

impl Backend {
    pub async fn start() -> Self {
        let dispatcher = Arc::new(
            dashboard_dispatcher(Arc::new(SystemTimeProvider), Arc::new(ThreadRandomSource))
                .unwrap(),
        );
        let document = Arc::new(describe(dispatcher.registry(), TITLE, "test"));
        let cors = cors_layer("*").unwrap();

        let rpc_config = RpcServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: cors.clone(),
        };
        let (rpc_addr, rpc) = RpcServer::new(rpc_config, dispatcher.clone(), document.clone())
            .start()
            .await
            .unwrap();

        let http_config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors,
        };
        let state = AppState {
            dispatcher,
            document,
        };
        let (http_addr, http) = HttpServer::new(http_config, state).start().await.unwrap();

        Self {
            rest_url: url(http_addr),
            rpc_url: url(rpc_addr),
            http,
            rpc,
        }
    }

    pub async fn stop(self) {
        self.http.stop().await;
        self.rpc.stop().unwrap();
        self.rpc.stopped().await;
    }
}

fn url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

//! Shared utilities for integration tests.

use std::net::SocketAddr;

use echo_server::config::ServiceConfig;
use echo_server::http::HttpServer;
use echo_server::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Defaults with the metrics endpoint off, so tests never fight over its port.
pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.observability.metrics_enabled = false;
    config
}

/// Start a server on an ephemeral port.
///
/// The listener is bound before returning, so requests can be sent right away.
/// Trigger the returned `Shutdown` to stop it.
pub async fn start_server(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// POST `body` verbatim and return status and body text.
#[allow(dead_code)]
pub async fn post(client: &reqwest::Client, url: &str, body: &str) -> (u16, String) {
    let res = client
        .post(url)
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .expect("Server unreachable");
    let status = res.status().as_u16();
    (status, res.text().await.unwrap())
}

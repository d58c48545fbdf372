//! The status counter as seen through the Prometheus scrape endpoint.
//!
//! Installs the process-wide recorder, so it lives in its own test binary.

use std::net::SocketAddr;
use std::time::Duration;

use echo_server::observability::metrics;

mod common;

/// An unused loopback address: bind port 0, remember what the OS chose, release it.
fn free_local_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

#[tokio::test]
async fn test_responses_counted_by_status_code() {
    let metrics_addr = free_local_addr();
    metrics::init_metrics(metrics_addr).unwrap();

    let (addr, shutdown) = common::start_server(common::test_config()).await;
    let client = common::client();
    let url = format!("http://{}/", addr);

    assert_eq!(common::post(&client, &url, r#"{"a":1}"#).await.0, 200);
    assert_eq!(common::post(&client, &url, r#"{"b":2}"#).await.0, 200);
    assert_eq!(common::post(&client, &url, r#"{"echoed":true}"#).await.0, 400);
    assert_eq!(common::post(&client, &url, "[]").await.0, 500);

    let expected = [
        r#"echo_requests_total{code="200"} 2"#,
        r#"echo_requests_total{code="400"} 1"#,
        r#"echo_requests_total{code="500"} 1"#,
    ];

    // The scrape listener starts in the background.
    let mut rendered = String::new();
    for _ in 0..50 {
        if let Ok(res) = client.get(format!("http://{}/metrics", metrics_addr)).send().await {
            rendered = res.text().await.unwrap_or_default();
            if expected.iter().all(|line| rendered.contains(line)) {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    for line in expected {
        assert!(rendered.contains(line), "missing {} in:\n{}", line, rendered);
    }

    shutdown.trigger();
}

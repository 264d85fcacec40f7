//! Shared helpers for the end-to-end test suites.
//!
//! Tests drive the real clients over HTTP against an in-process mock of the
//! Greenhouse endpoints, served on an ephemeral port.

use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

//! Request-counting echo server.
//!
//! Provides two surfaces:
//! - `/count` - plain-text total of requests handled by the echo path
//! - any other path - increments the counter and echoes the request back

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use handlers::{count_handler, echo_handler};
pub use types::SharedCounter;

/// Builds the router. `/count` reads the counter, everything else falls back
/// to the echo handler, which increments it.
pub fn router(counter: SharedCounter) -> Router {
    Router::new()
        .route("/count", get(count_handler))
        .fallback(echo_handler)
        .with_state(counter)
}

/// Serves the counter routes on an already bound listener until it fails.
pub async fn serve(listener: TcpListener, counter: SharedCounter) -> Result<(), anyhow::Error> {
    let addr = listener.local_addr()?;
    log::info!("Counter server listening on http://{}/", addr);
    log::info!("  - Echo: http://{}/<any path>", addr);
    log::info!("  - Count: http://{}/count", addr);

    let app = router(counter).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Counter server error: {}", e))
}

/// Binds the counter server's listening socket.
pub async fn bind_counter_server(host: &str, port: u16) -> Result<TcpListener, anyhow::Error> {
    TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind counter server to {}:{}: {}", host, port, e))
}

/// Binds `host:port` and serves the counter routes.
pub async fn start_counter_server(
    host: &str,
    port: u16,
    counter: SharedCounter,
) -> Result<(), anyhow::Error> {
    let listener = bind_counter_server(host, port).await?;
    serve(listener, counter).await
}

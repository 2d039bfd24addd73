// Server loop module
// Accepts connections and serves them strictly one after another

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::serve_connection;
use crate::config::AppState;
use crate::logger;

/// Accept loop; runs until the process is terminated
///
/// Each connection is served to completion before the next `accept`, so
/// requests are answered in arrival order and a slow client delays everyone
/// queued behind it.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                serve_connection(stream, peer_addr, &state).await;
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

// Configuration module entry point
// Builds the immutable startup configuration and the shared state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::ServerError;

// Re-export public types
pub use state::AppState;
pub use types::Config;

impl Config {
    /// Build the startup configuration
    ///
    /// Values are fixed in code: listen on 0.0.0.0:5000 and serve `docs`.
    /// No file or environment source is consulted.
    pub fn load() -> Result<Self, ServerError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.root", "docs")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}

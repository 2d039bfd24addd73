// Application state module
// Immutable state shared by every connection

use super::types::Config;
use crate::handler::StaticFiles;
use crate::http::NoCacheHeaders;

/// Application state
pub struct AppState {
    pub config: Config,
    pub files: StaticFiles,
}

impl AppState {
    /// Build the state and the static file responder from configuration
    ///
    /// The responder is always given the no-cache header hook.
    pub fn new(config: &Config) -> Self {
        let files = StaticFiles::new(&config.server.root)
            .with_index_files(config.server.index_files.clone())
            .with_header_hook(NoCacheHeaders);

        Self {
            config: config.clone(),
            files,
        }
    }
}

//! Request handler module
//!
//! Request dispatch and the static file responder.

pub mod listing;
pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry points
pub use router::{handle_request, RequestContext};
pub use static_files::StaticFiles;

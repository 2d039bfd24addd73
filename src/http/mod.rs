//! HTTP protocol layer module
//!
//! HTTP building blocks decoupled from the filesystem: response builders,
//! MIME detection, conditional requests and header hooks.

pub mod conditional;
pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use headers::{HeaderHook, NoCacheHeaders};
pub use response::{
    build_304_response, build_error_response, build_file_response, build_html_response,
    build_redirect_response,
};

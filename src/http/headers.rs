//! Response header hooks
//!
//! A hook runs over the header map of every response the static file
//! responder produces, after the response is built and before it is sent.

use hyper::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA};

/// Post-response-headers hook
pub trait HeaderHook: Send + Sync {
    fn apply(&self, headers: &mut HeaderMap);
}

impl<F> HeaderHook for F
where
    F: Fn(&mut HeaderMap) + Send + Sync,
{
    fn apply(&self, headers: &mut HeaderMap) {
        self(headers);
    }
}

/// The three cache-defeating headers, in emission order
pub const NO_CACHE_HEADERS: [(HeaderName, &str); 3] = [
    (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (PRAGMA, "no-cache"),
    (EXPIRES, "0"),
];

/// Appends `Cache-Control`, `Pragma` and `Expires` so clients never reuse a response
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCacheHeaders;

impl HeaderHook for NoCacheHeaders {
    fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in NO_CACHE_HEADERS {
            headers.append(name, HeaderValue::from_static(value));
        }
    }
}

//! HTTP response building module
//!
//! Builders for the responses the static file responder can produce. Every
//! builder sets `Server`, `Date` and `Connection` and, for bodies,
//! `Content-Type` and `Content-Length`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    CONNECTION, CONTENT_LENGTH, CONTENT_TYPE, DATE, LAST_MODIFIED, LOCATION, SERVER,
};
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};
use std::time::SystemTime;

use super::conditional::format_http_date;

/// Value of the `Server` header
pub const SERVER_NAME: &str = concat!("docserve/", env!("CARGO_PKG_VERSION"));

const ERROR_CONTENT_TYPE: &str = "text/html;charset=utf-8";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Base headers for every response
///
/// `Date` and `Connection` are set here so hyper does not append them on the
/// wire after the header hooks have run.
fn builder(status: StatusCode) -> Builder {
    Response::builder()
        .status(status)
        .header(SERVER, SERVER_NAME)
        .header(DATE, format_http_date(SystemTime::now()))
        .header(CONNECTION, "close")
}

/// Build 200 response for a file
///
/// `content_length` is the file size; for HEAD the body is empty and the
/// file need not have been read.
pub fn build_file_response(
    body: Bytes,
    content_length: u64,
    content_type: &str,
    last_modified: Option<&str>,
) -> Response<Full<Bytes>> {
    let mut resp = builder(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .header(CONTENT_LENGTH, content_length);
    if let Some(date) = last_modified {
        resp = resp.header(LAST_MODIFIED, date);
    }

    resp.body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying a generated HTML page
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    builder(StatusCode::OK)
        .header(CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 304 Not Modified response
pub fn build_304_response() -> Response<Full<Bytes>> {
    builder(StatusCode::NOT_MODIFIED)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("304", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect, used to add the trailing slash to directory paths
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    builder(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, location)
        .header(CONTENT_LENGTH, 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build an HTML error page
///
/// `message` defaults to the canonical reason phrase. The body is omitted for
/// HEAD requests while `Content-Length` still describes it.
pub fn build_error_response(
    status: StatusCode,
    message: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    let page = format!(
        r#"<!DOCTYPE HTML>
<html lang="en">
    <head>
        <meta charset="utf-8">
        <title>Error response</title>
    </head>
    <body>
        <h1>Error response</h1>
        <p>Error code: {code}</p>
        <p>Message: {message}.</p>
        <p>Error code explanation: {code} - {explain}.</p>
    </body>
</html>
"#,
        code = status.as_u16(),
        message = escape_html(message.unwrap_or(reason)),
        explain = explain(status),
    );

    let content_length = page.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(page)
    };

    builder(status)
        .header(CONTENT_TYPE, ERROR_CONTENT_TYPE)
        .header(CONTENT_LENGTH, content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Longer description shown on error pages
fn explain(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request syntax or unsupported method",
        StatusCode::FORBIDDEN => "Request forbidden -- authorization will not help",
        StatusCode::NOT_FOUND => "Nothing matches the given URI",
        StatusCode::INTERNAL_SERVER_ERROR => "Server got itself in trouble",
        StatusCode::NOT_IMPLEMENTED => "Server does not support this operation",
        _ => status.canonical_reason().unwrap_or("Unknown"),
    }
}

/// Escape `&`, `<` and `>` for HTML text content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Body;

    #[test]
    fn test_error_page() {
        let resp = build_error_response(StatusCode::NOT_FOUND, Some("File not found"), false);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[CONTENT_TYPE], ERROR_CONTENT_TYPE);
        assert_eq!(resp.headers()[CONNECTION], "close");
        assert_eq!(resp.headers()[SERVER], SERVER_NAME);
        let len = resp.body().size_hint().exact().unwrap();
        assert_eq!(resp.headers()[CONTENT_LENGTH], len.to_string().as_str());
    }

    #[test]
    fn test_error_page_head_has_no_body() {
        let resp = build_error_response(StatusCode::NOT_IMPLEMENTED, None, true);
        assert_eq!(resp.body().size_hint().exact(), Some(0));
        assert_ne!(resp.headers()[CONTENT_LENGTH], "0");
    }

    #[test]
    fn test_file_response_head() {
        let resp = build_file_response(
            Bytes::new(),
            5,
            "text/plain",
            Some("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "5");
        assert_eq!(resp.body().size_hint().exact(), Some(0));
    }

    #[test]
    fn test_base_headers_precede_content_headers() {
        let resp = build_file_response(Bytes::from_static(b"hi"), 2, "text/plain", None);
        let names: Vec<&str> = resp.headers().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            ["server", "date", "connection", "content-type", "content-length"]
        );
        assert_eq!(resp.headers()[CONNECTION], "close");
        assert!(resp.headers()[DATE].to_str().unwrap().ends_with(" GMT"));
    }

    #[test]
    fn test_redirect() {
        let resp = build_redirect_response("/guide/");
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()[LOCATION], "/guide/");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "0");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&c"), "a&lt;b&gt;&amp;c");
        assert_eq!(escape_html("plain \"quotes\""), "plain \"quotes\"");
    }
}

//! Static file serving module
//!
//! `StaticFiles` maps request paths onto a document root and serves files,
//! index pages and directory listings. Header hooks registered on it run over
//! every response it produces, error responses included.

use crate::handler::listing;
use crate::handler::resolve::{decode_path, resolve};
use crate::handler::RequestContext;
use crate::http::{self, conditional, mime, HeaderHook};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Configurable static file responder
pub struct StaticFiles {
    root: PathBuf,
    index_files: Vec<String>,
    header_hooks: Vec<Box<dyn HeaderHook>>,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            header_hooks: Vec::new(),
        }
    }

    /// Replace the files tried, in order, for directory requests
    #[must_use]
    pub fn with_index_files(mut self, index_files: Vec<String>) -> Self {
        self.index_files = index_files;
        self
    }

    /// Register a hook run over the headers of every response
    ///
    /// Hooks run in registration order, after the response is built.
    #[must_use]
    pub fn with_header_hook(mut self, hook: impl HeaderHook + 'static) -> Self {
        self.header_hooks.push(Box::new(hook));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Produce the response for a request, with all header hooks applied
    pub async fn respond(&self, ctx: &RequestContext) -> Response<Full<Bytes>> {
        let mut response = self.serve(ctx).await;
        for hook in &self.header_hooks {
            hook.apply(response.headers_mut());
        }
        response
    }

    async fn serve(&self, ctx: &RequestContext) -> Response<Full<Bytes>> {
        let is_head = match ctx.method {
            Method::GET => false,
            Method::HEAD => true,
            ref other => {
                return http::build_error_response(
                    StatusCode::NOT_IMPLEMENTED,
                    Some(&format!("Unsupported method ('{other}')")),
                    false,
                );
            }
        };

        let resolved = resolve(&self.root, &ctx.path);
        let Ok(metadata) = fs::metadata(&resolved.fs_path).await else {
            return file_not_found(is_head);
        };

        if !self.contains(&resolved.fs_path).await {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                ctx.path,
                resolved.fs_path.display()
            ));
            return file_not_found(is_head);
        }

        if metadata.is_dir() {
            return self.serve_directory(ctx, &resolved.fs_path, is_head).await;
        }

        // A file cannot be addressed as a directory
        if resolved.trailing_slash {
            return file_not_found(is_head);
        }

        serve_file(ctx, &resolved.fs_path, &metadata, is_head).await
    }

    async fn serve_directory(
        &self,
        ctx: &RequestContext,
        dir: &Path,
        is_head: bool,
    ) -> Response<Full<Bytes>> {
        if !ctx.path.ends_with('/') {
            let location = match &ctx.query {
                Some(q) => format!("{}/?{q}", ctx.path),
                None => format!("{}/", ctx.path),
            };
            return http::build_redirect_response(&location);
        }

        for index_file in &self.index_files {
            let index_path = dir.join(index_file);
            let Ok(m) = fs::metadata(&index_path).await else {
                continue;
            };
            if m.is_file() && self.contains(&index_path).await {
                return serve_file(ctx, &index_path, &m, is_head).await;
            }
        }

        match listing::read_entries(dir).await {
            Ok(entries) => {
                let page = listing::render_listing(&decode_path(&ctx.path), &entries);
                http::build_html_response(page, is_head)
            }
            Err(e) => {
                logger::log_warning(&format!(
                    "Failed to list directory '{}': {e}",
                    dir.display()
                ));
                http::build_error_response(
                    StatusCode::NOT_FOUND,
                    Some("No permission to list directory"),
                    is_head,
                )
            }
        }
    }

    /// Check that `path`, with symlinks resolved, lies beneath the root
    async fn contains(&self, path: &Path) -> bool {
        let root = match fs::canonicalize(&self.root).await {
            Ok(p) => p,
            Err(e) => {
                logger::log_warning(&format!(
                    "Document root not found or inaccessible '{}': {e}",
                    self.root.display()
                ));
                return false;
            }
        };
        fs::canonicalize(path)
            .await
            .is_ok_and(|p| p.starts_with(&root))
    }
}

async fn serve_file(
    ctx: &RequestContext,
    path: &Path,
    metadata: &Metadata,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let modified = metadata.modified().ok();

    if let Some(mtime) = modified {
        if conditional::is_not_modified(
            ctx.if_modified_since.as_deref(),
            ctx.has_if_none_match,
            mtime,
        ) {
            return http::build_304_response();
        }
    }

    // HEAD only needs the size, which the metadata already has
    let (body, content_length) = if is_head {
        (Bytes::new(), metadata.len())
    } else {
        match fs::read(path).await {
            Ok(c) => {
                let len = c.len() as u64;
                (Bytes::from(c), len)
            }
            Err(e) => {
                logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
                return file_not_found(is_head);
            }
        }
    };

    let last_modified = modified.map(conditional::format_http_date);
    http::build_file_response(
        body,
        content_length,
        mime::content_type_for(path),
        last_modified.as_deref(),
    )
}

fn file_not_found(is_head: bool) -> Response<Full<Bytes>> {
    http::build_error_response(StatusCode::NOT_FOUND, Some("File not found"), is_head)
}

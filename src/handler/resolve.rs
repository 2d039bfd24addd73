//! Request path resolution
//!
//! Maps a URL path onto a filesystem path beneath the document root. The
//! mapping is purely lexical: `..` can never climb above the root.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A request path mapped under the document root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub fs_path: PathBuf,
    /// The request path ended with `/`
    pub trailing_slash: bool,
}

/// Percent-decode a URL path, replacing invalid UTF-8 sequences
pub fn decode_path(path: &str) -> String {
    urlencoding::decode(path).map_or_else(
        |_| String::from_utf8_lossy(&urlencoding::decode_binary(path.as_bytes())).into_owned(),
        Cow::into_owned,
    )
}

/// Normalize a decoded path into the segments kept below the root
fn normalize_segments(decoded: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s if s.contains('\\') || s.contains('\0') => {}
            s => segments.push(s),
        }
    }
    segments
}

/// Resolve a raw (still percent-encoded) URL path against `root`
pub fn resolve(root: &Path, raw_path: &str) -> ResolvedPath {
    let decoded = decode_path(raw_path);
    let trailing_slash = decoded.trim_end().ends_with('/');

    let mut fs_path = root.to_path_buf();
    for segment in normalize_segments(&decoded) {
        fs_path.push(segment);
    }

    ResolvedPath {
        fs_path,
        trailing_slash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(raw: &str) -> PathBuf {
        resolve(Path::new("docs"), raw).fs_path
    }

    #[test]
    fn test_plain_file() {
        assert_eq!(resolved("/index.html"), Path::new("docs/index.html"));
        assert_eq!(resolved("/guide/setup.html"), Path::new("docs/guide/setup.html"));
    }

    #[test]
    fn test_root() {
        let r = resolve(Path::new("docs"), "/");
        assert_eq!(r.fs_path, Path::new("docs"));
        assert!(r.trailing_slash);
    }

    #[test]
    fn test_traversal_stays_under_root() {
        assert_eq!(resolved("/../../etc/passwd"), Path::new("docs/etc/passwd"));
        assert_eq!(resolved("/guide/../../../etc/passwd"), Path::new("docs/etc/passwd"));
        assert_eq!(resolved("/%2e%2e/%2e%2e/etc/passwd"), Path::new("docs/etc/passwd"));
    }

    #[test]
    fn test_dot_and_empty_segments() {
        assert_eq!(resolved("/./guide//./a.html"), Path::new("docs/guide/a.html"));
        assert_eq!(resolved("/guide/../a.html"), Path::new("docs/a.html"));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(resolved("/my%20notes.txt"), Path::new("docs/my notes.txt"));
        assert_eq!(resolved("/caf%C3%A9.html"), Path::new("docs/café.html"));
    }

    #[test]
    fn test_backslash_segment_dropped() {
        assert_eq!(resolved("/..%5c..%5cwindows/x"), Path::new("docs/x"));
    }

    #[test]
    fn test_trailing_slash_flag() {
        assert!(resolve(Path::new("docs"), "/guide/").trailing_slash);
        assert!(!resolve(Path::new("docs"), "/guide").trailing_slash);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        assert_eq!(decode_path("/a%FFb"), "/a\u{FFFD}b");
    }
}

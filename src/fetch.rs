//! Retrieval of Markdown sources over HTTP or from disk.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::time::Duration;
use ureq::Agent;

/// Default timeout for remote fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on a remote response body, in bytes.
pub const DEFAULT_BODY_LIMIT: u64 = 50 * 1024 * 1024;

/// Fetches the text of a document by URL.
pub trait Fetch {
    /// Returns the full response body.
    ///
    /// # Errors
    ///
    /// Returns error if the document cannot be retrieved or is not UTF8
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches `http(s)://` URLs with a single GET and reads anything else as a
/// local path (`file://` prefix allowed).
///
/// Non-2xx responses are errors. No custom headers, no retries. Remote
/// bodies larger than the body limit ([`DEFAULT_BODY_LIMIT`] unless set with
/// [`SourceFetcher::with_body_limit`]) are errors rather than truncated.
pub struct SourceFetcher {
    agent: Agent,
    body_limit: u64,
}

impl SourceFetcher {
    /// Creates fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Sets the largest remote body accepted, in bytes.
    pub fn with_body_limit(mut self, bytes: u64) -> Self {
        self.body_limit = bytes;
        self
    }

    fn fetch_remote(&self, url: &str) -> Result<String> {
        let response = self
            .agent
            .get(url)
            .call()
            .with_context(|| format!("GET {} failed", url))?;

        response
            .into_body()
            .into_with_config()
            .limit(self.body_limit)
            .read_to_string()
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

impl Default for SourceFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Fetch for SourceFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        if is_remote(url) {
            debug!("Fetching {}", url);
            return self.fetch_remote(url);
        }

        let path = url.strip_prefix("file://").unwrap_or(url);
        debug!("Reading {}", path);
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

/// Whether the URL must be fetched over the network.
pub fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    /// Serves `body` to a single request on localhost and returns its URL.
    fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Should bind localhost");
        let addr = listener.local_addr().expect("Should have local address");

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request);
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/markdown\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}/notes.md", addr)
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/README.md"));
        assert!(is_remote("http://localhost:8000/page.md"));
        assert!(!is_remote("docs/README.md"));
        assert!(!is_remote("file:///tmp/page.md"));
    }

    #[test]
    fn test_fetch_local_file() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Notes\n").expect("Should write file");
        let fetcher = SourceFetcher::default();

        // Act
        let text = fetcher
            .fetch(path.to_str().expect("Temp path should be UTF8"))
            .expect("Should read local file");

        // Assert
        assert_eq!(text, "# Notes\n");
    }

    #[test]
    fn test_fetch_file_scheme() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("page.md");
        fs::write(&path, "hi").expect("Should write file");
        let url = format!("file://{}", path.display());

        // Act
        let text = SourceFetcher::default()
            .fetch(&url)
            .expect("Should strip file scheme");

        // Assert
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_fetch_missing_file_errors() {
        // Arrange
        let fetcher = SourceFetcher::default();

        // Act
        let result = fetcher.fetch("does/not/exist.md");

        // Assert
        let err = result.expect_err("Missing file should fail");
        assert!(
            format!("{:#}", err).contains("does/not/exist.md"),
            "Error should name the path: {:#}",
            err
        );
    }

    #[test]
    fn test_fetch_remote_within_limit() {
        // Arrange
        let url = serve_once("# Remote\n");
        let fetcher = SourceFetcher::default().with_body_limit(1024);

        // Act
        let text = fetcher.fetch(&url).expect("Small body should be read");

        // Assert
        assert_eq!(text, "# Remote\n");
    }

    #[test]
    fn test_fetch_remote_over_limit_errors() {
        // Arrange
        let url = serve_once("# A document longer than sixteen bytes\n");
        let fetcher = SourceFetcher::default().with_body_limit(16);

        // Act
        let result = fetcher.fetch(&url);

        // Assert
        let err = result.expect_err("Oversized body should fail");
        assert!(
            format!("{:#}", err).contains("Failed to read response body"),
            "Error should come from the body read: {:#}",
            err
        );
    }
}

//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out Markdown documents in temporary
//! directories and a fetcher that serves fixed documents from memory.

#![allow(dead_code)]

use anyhow::{Result, bail};
use mdview::Fetch;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary directory holding the given Markdown documents.
///
/// # Arguments
///
/// * `files`: Pairs of relative path and content
///
/// # Errors
///
/// Returns error if directory creation or a file write fails
pub fn create_docs(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (path, content) in files {
        write_file(dir.path(), path, content)?;
    }
    Ok(dir)
}

/// Writes file below `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Joins `root` and `path` into a URL-like string.
pub fn url_in(root: &Path, path: &str) -> String {
    format!("{}/{}", root.display(), path)
}

/// Serves documents from memory, failing for unknown URLs.
#[derive(Default)]
pub struct MemoryFetcher {
    documents: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn with(mut self, url: &str, markdown: &str) -> Self {
        self.documents.insert(url.to_string(), markdown.to_string());
        self
    }
}

impl Fetch for MemoryFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        match self.documents.get(url) {
            Some(markdown) => Ok(markdown.clone()),
            None => bail!("404 Not Found: {}", url),
        }
    }
}

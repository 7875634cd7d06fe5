//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::slides::DEFAULT_REVEAL_BASE;
use crate::url::{html_url_from_markdown_url, is_slides_url};

/// How the document is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Slides for `*.slides.html`, page otherwise
    Auto,
    /// Markdown rendered into an article page
    Page,
    /// reveal.js slide deck
    Slides,
}

/// Command line configuration for mdview.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdview", version, about, long_about = None)]
pub struct Config {
    /// Page URL or path (index.html, talk.slides.html, page.html or page.md)
    pub url: String,

    /// Output HTML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Presentation mode
    #[arg(long, value_enum, default_value_t = Mode::Auto)]
    pub mode: Mode,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Base URL of the reveal.js distribution
    #[arg(long, default_value = DEFAULT_REVEAL_BASE)]
    pub reveal_base: String,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Do not open the result in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is empty or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            bail!("Page URL must not be empty");
        }

        if self.timeout == 0 {
            bail!("Timeout must be at least one second");
        }

        Ok(())
    }

    /// Presentation mode with `auto` resolved from the URL.
    pub fn resolved_mode(&self) -> Mode {
        match self.mode {
            Mode::Auto if is_slides_url(&self.url) => Mode::Slides,
            Mode::Auto => Mode::Page,
            mode => mode,
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Output file, defaulting to the page's file name in the current
    /// directory.
    ///
    /// A Markdown URL yields the matching `.html` name; a URL without a file
    /// name yields `index.html`.
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let name = file_name(&self.url);
        if name.is_empty() {
            return PathBuf::from("index.html");
        }

        let name = html_url_from_markdown_url(name);
        if name.ends_with(".html") {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{}.html", name))
        }
    }

    /// Title from configuration or the page file name.
    pub fn document_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        let name = file_name(&self.url);
        let stem = name
            .trim_end_matches(".html")
            .trim_end_matches(".slides")
            .trim_end_matches(".md");

        match stem {
            "" | "index" | "README" => "README".to_string(),
            stem => stem.to_string(),
        }
    }
}

/// Last path segment of a URL, without query or fragment.
fn file_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}

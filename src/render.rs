//! Page rendering: fetch Markdown, render it into a container, fix links.

use anyhow::{Context, Result};
use log::{debug, info};
use std::cell::OnceCell;

use crate::element::ContentElement;
use crate::fetch::Fetch;
use crate::markdown::{LinkRewrite, MarkdownRenderer, Render, rewrite_anchor_hrefs};
use crate::url::{html_url_from_markdown_url, markdown_url_from_url};

/// Render request for a single page.
///
/// Owned by the caller and dropped once the call returns. The container is
/// borrowed mutably, so no other render can target it concurrently.
pub struct PageConfig<'a> {
    /// URL of the HTML page being produced
    pub url: String,
    /// Container whose content is replaced
    pub content: &'a mut ContentElement,
}

/// Markdown rendered to HTML with its links already rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMarkdown {
    pub html: String,
    pub rewrites: Vec<LinkRewrite>,
}

/// Outcome of a successful page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Markdown URL that was fetched
    pub markdown_url: String,
    /// Anchors whose target changed
    pub rewrites: Vec<LinkRewrite>,
}

/// Renders Markdown documents into container elements.
///
/// The Markdown renderer is acquired on first use through `load` and
/// reused for every later call on the same `PageRenderer`.
pub struct PageRenderer<F, R = MarkdownRenderer<'static>> {
    fetcher: F,
    load: fn() -> R,
    renderer: OnceCell<R>,
}

impl<F: Fetch> PageRenderer<F> {
    /// Creates page renderer backed by comrak.
    pub fn new(fetcher: F) -> Self {
        Self::with_loader(fetcher, MarkdownRenderer::new)
    }
}

impl<F: Fetch, R: Render> PageRenderer<F, R> {
    /// Creates page renderer with a custom Markdown renderer loader.
    ///
    /// # Arguments
    ///
    /// * `fetcher`: Source of Markdown text
    /// * `load`: Builds the renderer, called at most once
    pub fn with_loader(fetcher: F, load: fn() -> R) -> Self {
        Self {
            fetcher,
            load,
            renderer: OnceCell::new(),
        }
    }

    /// Returns the renderer, loading it on first call.
    fn renderer(&self) -> &R {
        self.renderer.get_or_init(|| {
            debug!("Loading markdown renderer");
            (self.load)()
        })
    }

    /// Renders Markdown text and rewrites its links without touching any
    /// container.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails
    pub fn render_markdown(&self, markdown: &str) -> Result<RenderedMarkdown> {
        let html = self.renderer().render(markdown)?;
        let (html, rewrites) = rewrite_anchor_hrefs(&html, html_url_from_markdown_url);

        Ok(RenderedMarkdown { html, rewrites })
    }

    /// Fetches `markdown_url`, renders it into `config.content` and rewrites
    /// the links of the inserted content.
    ///
    /// Prior content of the container is replaced. On failure the container
    /// is left untouched.
    ///
    /// # Arguments
    ///
    /// * `config`: Page URL and target container
    /// * `markdown_url`: Markdown source to fetch
    ///
    /// # Returns
    ///
    /// Fetched URL and the links that were rewritten
    ///
    /// # Errors
    ///
    /// Returns error if the fetch or rendering fails
    pub fn insert_rendered_file(
        &self,
        config: PageConfig<'_>,
        markdown_url: &str,
    ) -> Result<RenderReport> {
        let renderer = self.renderer();

        let markdown = self
            .fetcher
            .fetch(markdown_url)
            .with_context(|| format!("Failed to fetch markdown for {}", config.url))?;

        let html = renderer
            .render(&markdown)
            .with_context(|| format!("Failed to render {}", markdown_url))?;

        config.content.set_inner_html(html);
        let rewrites = config.content.rewrite_links(html_url_from_markdown_url);

        info!(
            "Rendered {} into #{} ({} links rewritten)",
            markdown_url,
            config.content.id(),
            rewrites.len()
        );

        Ok(RenderReport {
            markdown_url: markdown_url.to_string(),
            rewrites,
        })
    }

    /// Renders the Markdown source of `config.url` into `config.content`.
    ///
    /// # Errors
    ///
    /// Returns error if the fetch or rendering fails
    pub fn render_page(&self, config: PageConfig<'_>) -> Result<RenderReport> {
        let markdown_url = markdown_url_from_url(&config.url);
        self.insert_rendered_file(config, &markdown_url)
    }
}

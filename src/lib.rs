//! Markdown documents as HTML pages or reveal.js slide decks.

mod assets;
pub mod components;
mod config;
mod element;
mod fetch;
mod markdown;
pub mod pages;
mod render;
pub mod slides;
pub mod url;

pub use assets::{PAGE_STYLESHEET, SLIDES_STYLESHEET, write_css_assets};
pub use config::{Config, Mode};
pub use element::ContentElement;
pub use fetch::{DEFAULT_BODY_LIMIT, DEFAULT_TIMEOUT, Fetch, SourceFetcher, is_remote};
pub use markdown::{LinkRewrite, MarkdownRenderer, Render, rewrite_anchor_hrefs};
pub use render::{PageConfig, PageRenderer, RenderReport, RenderedMarkdown};
pub use slides::{Dependency, RevealConfig, SlideConfig, SlideDeck};
pub use url::{html_url_from_markdown_url, markdown_url_from_url};

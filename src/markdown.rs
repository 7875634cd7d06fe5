//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and rewriting of anchor
//! targets in rendered HTML.

mod links;
mod renderer;

pub use links::{LinkRewrite, rewrite_anchor_hrefs};
pub use renderer::{MarkdownRenderer, Render};

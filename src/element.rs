//! Container element receiving rendered content.

use crate::markdown::{LinkRewrite, rewrite_anchor_hrefs};

/// Element whose inner HTML is replaced by rendered Markdown.
///
/// Stands in for the page node content is injected into. The `id` is
/// emitted on the element when the page template writes it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentElement {
    id: String,
    inner_html: String,
}

impl ContentElement {
    /// Creates an empty container with the given element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    /// Creates a container that already holds content.
    pub fn with_html(id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: html.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replaces all prior content.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    /// Rewrites the `href` of every descendant anchor.
    ///
    /// Anchors without `href` are left as they are.
    ///
    /// # Returns
    ///
    /// Anchors whose target changed, in document order
    pub fn rewrite_links<F>(&mut self, rewrite: F) -> Vec<LinkRewrite>
    where
        F: FnMut(&str) -> String,
    {
        let (html, rewrites) = rewrite_anchor_hrefs(&self.inner_html, rewrite);
        self.inner_html = html;
        rewrites
    }
}

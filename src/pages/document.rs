//! Article page holding rendered Markdown

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::nav_bar;
use crate::element::ContentElement;

/// Generates the page for a rendered Markdown document
///
/// The container element is written out with its id and current inner
/// HTML, so the result reflects whatever the page renderer put there.
///
/// # Arguments
///
/// * `title`: Document title
/// * `page_url`: URL of the page being generated
/// * `markdown_url`: URL of the Markdown source
/// * `content`: Container holding rendered content
/// * `stylesheets`: CSS URLs to link
pub fn generate(
    title: &str,
    page_url: &str,
    markdown_url: &str,
    content: &ContentElement,
    stylesheets: &[&str],
) -> Markup {
    let body = html! {
        (nav_bar(page_url, markdown_url))
        main id=(content.id()) class="markdown-body" {
            (PreEscaped(content.inner_html()))
        }
    };

    page_wrapper(title, stylesheets, body)
}

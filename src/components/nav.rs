//! Navigation overlay component

use maud::{Markup, html};

/// Renders the navigation bar shown above pages and slide decks
///
/// Shows the document path as a breadcrumb trail and a link to the Markdown
/// source. On slide pages it is positioned over the deck by CSS.
///
/// # Arguments
///
/// * `page_url`: URL of the page being viewed
/// * `markdown_url`: URL of its Markdown source
pub fn nav_bar(page_url: &str, markdown_url: &str) -> Markup {
    let components = path_components(page_url);
    let last = components.len().saturating_sub(1);

    html! {
        nav class="mdview-nav" {
            div class="breadcrumb" {
                @for (i, component) in components.iter().enumerate() {
                    @if i > 0 {
                        span class="breadcrumb-separator" { "/" }
                    }
                    @if i == last {
                        span class="breadcrumb-current" { (*component) }
                    } @else {
                        span class="breadcrumb-link" { (*component) }
                    }
                }
            }
            a href=(markdown_url) class="source-link" { "Markdown source" }
        }
    }
}

/// Splits a URL path into components, dropping scheme, host, query and
/// fragment.
pub fn path_components(url: &str) -> Vec<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map_or("", |(_, p)| p),
        None => path,
    };

    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

//! Slide deck page hosting reveal.js

use anyhow::Result;
use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::nav_bar;
use crate::slides::SlideDeck;

/// Generates the page hosting a slide deck
///
/// The presentation container is the first child of `<body>`, followed by
/// the navigation overlay and the engine scripts.
///
/// # Arguments
///
/// * `title`: Deck title
/// * `page_url`: URL of the page being generated
/// * `deck`: Prepared slide deck
/// * `stylesheets`: Extra CSS URLs linked after the engine's own
///
/// # Errors
///
/// Returns error if the engine configuration cannot be serialized
pub fn generate(
    title: &str,
    page_url: &str,
    deck: &SlideDeck,
    stylesheets: &[&str],
) -> Result<Markup> {
    let initialize = deck.config().initialize_script()?;

    let mut links = deck.stylesheets();
    links.extend(stylesheets.iter().map(|s| (*s).to_string()));

    let body = html! {
        (deck.skeleton())
        (nav_bar(page_url, deck.markdown_url()))
        script { (PreEscaped(deck.loader_guard())) }
        script src=(deck.engine_script()) {}
        script { (PreEscaped(initialize)) }
    };

    Ok(page_wrapper(title, links.as_slice(), body))
}

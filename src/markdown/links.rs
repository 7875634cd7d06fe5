//! Anchor target rewriting over rendered HTML.

use kuchikikiki::NodeRef;
use log::{debug, warn};
use markup5ever::local_name;
use tendril::TendrilSink;

/// Puts the parser straight into body content, so leading comments and
/// text stay inside `<body>` instead of moving to the document node.
const FRAGMENT_PREFIX: &str = "<!DOCTYPE html><body>";

/// Single anchor whose `href` was changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewrite {
    pub from: String,
    pub to: String,
}

/// Rewrites the `href` attribute of every `<a>` element in an HTML fragment.
///
/// Parses the fragment with html5ever, selects `a[href]` elements, hands
/// each `href` value to `rewrite` and writes the result back. Anchors
/// without `href`, comments and non-anchor elements are left alone. When
/// anchors are present the fragment is re-serialized, so attribute quoting
/// is normalized.
///
/// # Arguments
///
/// * `html`: HTML fragment, typically fresh renderer output
/// * `rewrite`: Maps an old `href` value to its new value
///
/// # Returns
///
/// Rewritten HTML and the list of anchors whose target changed, in
/// document order
pub fn rewrite_anchor_hrefs<F>(html: &str, mut rewrite: F) -> (String, Vec<LinkRewrite>)
where
    F: FnMut(&str) -> String,
{
    if !html.to_ascii_lowercase().contains("<a") {
        return (html.to_string(), Vec::new());
    }

    let document = kuchikikiki::parse_html().one(format!("{}{}", FRAGMENT_PREFIX, html));

    let Ok(anchors) = document.select("a[href]") else {
        return (html.to_string(), Vec::new());
    };

    let mut rewrites = Vec::new();
    for anchor in anchors {
        let mut attributes = anchor.attributes.borrow_mut();
        let Some(href) = attributes.get_mut(local_name!("href")) else {
            continue;
        };

        let new_url = rewrite(href);
        if new_url != *href {
            debug!("url rewritten: {}, {}", href, new_url);
            rewrites.push(LinkRewrite {
                from: std::mem::replace(href, new_url.clone()),
                to: new_url,
            });
        }
    }

    if rewrites.is_empty() {
        return (html.to_string(), rewrites);
    }

    match serialize_body(&document) {
        Some(rewritten) => (rewritten, rewrites),
        None => {
            warn!("Failed to serialize rewritten links, keeping original HTML");
            (html.to_string(), Vec::new())
        }
    }
}

/// Serializes the children of `<body>`, i.e. the parsed fragment.
fn serialize_body(document: &NodeRef) -> Option<String> {
    let body = document.select_first("body").ok()?;

    let mut out = Vec::new();
    for child in body.as_node().children() {
        child.serialize(&mut out).ok()?;
    }

    String::from_utf8(out).ok()
}

//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps body content with the document head shared by all outputs
///
/// Emits DOCTYPE, charset, viewport, title and stylesheet links. The caller
/// provides the full body content, so it decides what the first child of
/// `<body>` is.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: CSS URLs to link, in order
/// * `body`: Body content
pub fn page_wrapper<S: AsRef<str>>(title: &str, stylesheets: &[S], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - mdview" }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet.as_ref());
                }
            }
            body {
                (body)
            }
        }
    }
}

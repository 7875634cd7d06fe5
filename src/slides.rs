//! Slide deck bootstrap for reveal.js.
//!
//! Slides are not rendered here. The deck points reveal.js at the Markdown
//! source and lets its Markdown plugin split and render the slides in the
//! browser.

use anyhow::{Context, Result};
use log::info;
use maud::{Markup, html};
use serde::Serialize;

use crate::url::markdown_url_from_url;

/// Default location of the reveal.js distribution.
pub const DEFAULT_REVEAL_BASE: &str = "node_modules/reveal.js";

/// Pattern separating slides in the Markdown source.
pub const SLIDE_SEPARATOR: &str = "^---";

/// Pattern starting speaker notes within a slide.
pub const NOTES_SEPARATOR: &str = "^Text:";

/// Restores the `define.amd` value saved by [`AMD_GUARD`] once the Markdown
/// plugin has loaded. Does nothing when the guard saved nothing.
const MARKDOWN_PLUGIN_CALLBACK: &str = "if (typeof define === \"function\" && \"__mdviewAmd\" in window) { define.amd = window.__mdviewAmd; delete window.__mdviewAmd; }";

/// Hides AMD loaders while reveal.js registers itself as a global, keeping
/// the page's own `define.amd` in `window.__mdviewAmd`.
const AMD_GUARD: &str = "if (typeof define === \"function\" && define.amd) { window.__mdviewAmd = define.amd; define.amd = false; }";

/// Slide deck request.
#[derive(Debug, Clone)]
pub struct SlideConfig {
    /// URL of the HTML page hosting the deck
    pub url: String,
    /// Base URL of the reveal.js distribution
    pub reveal_base: String,
}

impl SlideConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reveal_base: DEFAULT_REVEAL_BASE.to_string(),
        }
    }
}

/// Script the engine loads before starting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub src: String,
    /// Load without blocking initialization
    #[serde(rename = "async", skip_serializing_if = "std::ops::Not::not")]
    pub async_load: bool,
    /// JavaScript run once the script has loaded
    #[serde(skip)]
    pub callback: Option<&'static str>,
}

/// Options passed to `Reveal.initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealConfig {
    pub history: bool,
    pub controls: bool,
    pub progress: bool,
    pub center: bool,
    #[serde(skip)]
    pub dependencies: Vec<Dependency>,
}

impl RevealConfig {
    /// Deck configuration with history, controls, progress and centering on.
    ///
    /// Dependencies, in load order: the marked parser, the Markdown plugin
    /// and the speaker notes plugin (async).
    pub fn new(reveal_base: &str) -> Self {
        let base = reveal_base.trim_end_matches('/');

        Self {
            history: true,
            controls: true,
            progress: true,
            center: true,
            dependencies: vec![
                Dependency {
                    src: format!("{}/plugin/markdown/marked.js", base),
                    async_load: false,
                    callback: None,
                },
                Dependency {
                    src: format!("{}/plugin/markdown/markdown.js", base),
                    async_load: false,
                    callback: Some(MARKDOWN_PLUGIN_CALLBACK),
                },
                Dependency {
                    src: format!("{}/plugin/notes/notes.js", base),
                    async_load: true,
                    callback: None,
                },
            ],
        }
    }

    /// Builds the JavaScript that starts the engine.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration cannot be serialized
    pub fn initialize_script(&self) -> Result<String> {
        let options =
            serde_json::to_string(self).context("Failed to serialize reveal.js options")?;

        let dependencies = self
            .dependencies
            .iter()
            .map(dependency_literal)
            .collect::<Result<Vec<_>>>()?;

        Ok(format!(
            "(function () {{\n  var options = {};\n  options.dependencies = [\n    {}\n  ];\n  Reveal.initialize(options);\n}})();",
            options,
            dependencies.join(",\n    ")
        ))
    }
}

/// Writes a dependency as a JavaScript object literal.
///
/// The callback is code, not data, so it is spliced in after serde writes
/// the rest of the object.
fn dependency_literal(dependency: &Dependency) -> Result<String> {
    let json = serde_json::to_string(dependency).context("Failed to serialize dependency")?;

    let Some(callback) = dependency.callback else {
        return Ok(json);
    };

    let open = json
        .strip_suffix('}')
        .context("Serialized dependency is not an object")?;

    Ok(format!("{},\"callback\":function () {{ {} }}}}", open, callback))
}

/// Everything a page needs to host a reveal.js deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    markdown_url: String,
    reveal_base: String,
    config: RevealConfig,
}

impl SlideDeck {
    pub fn markdown_url(&self) -> &str {
        &self.markdown_url
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Stylesheets the engine needs, in order.
    pub fn stylesheets(&self) -> Vec<String> {
        vec![
            format!("{}/css/reveal.css", self.reveal_base),
            format!("{}/css/theme/white.css", self.reveal_base),
        ]
    }

    /// Engine script loaded before initialization.
    pub fn engine_script(&self) -> String {
        format!("{}/js/reveal.js", self.reveal_base)
    }

    /// Inline script run before the engine script loads.
    pub fn loader_guard(&self) -> &'static str {
        AMD_GUARD
    }

    /// Presentation container holding a single Markdown-backed section.
    ///
    /// Must be the first child of `<body>`; navigation overlays are placed
    /// after it and positioned by CSS.
    pub fn skeleton(&self) -> Markup {
        html! {
            div class="reveal" {
                div class="slides" {
                    section
                        data-markdown=(self.markdown_url)
                        data-charset="utf-8"
                        data-separator=(SLIDE_SEPARATOR)
                        data-separator-notes=(NOTES_SEPARATOR) {}
                }
            }
        }
    }
}

/// Prepares a slide deck for the page at `config.url`.
///
/// Derives the Markdown source from the page URL and fixes the engine
/// configuration. Rendering happens in the browser once the page loads.
pub fn init(config: &SlideConfig) -> SlideDeck {
    let markdown_url = markdown_url_from_url(&config.url);
    info!("Slide deck for {} uses {}", config.url, markdown_url);

    let reveal_base = config.reveal_base.trim_end_matches('/').to_string();

    SlideDeck {
        config: RevealConfig::new(&reveal_base),
        markdown_url,
        reveal_base,
    }
}

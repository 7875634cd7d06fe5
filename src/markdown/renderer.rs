//! Markdown to HTML conversion backed by comrak and syntect.

use anyhow::{Context, Result};
use comrak::Options;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Converts Markdown text to an HTML fragment.
///
/// Implemented by [`MarkdownRenderer`]; page rendering is generic over it
/// so the renderer can be swapped out.
pub trait Render {
    /// Renders Markdown text to HTML.
    ///
    /// # Errors
    ///
    /// Returns error if the renderer cannot produce HTML for the input
    fn render(&self, markdown: &str) -> Result<String>;
}

/// Renders lesson and documentation Markdown with GFM extensions.
///
/// Enables tables, strikethrough, autolinks, task lists, footnotes and
/// description lists, with smart punctuation. Raw HTML in the source is
/// kept. Fenced code blocks with a language are highlighted with syntect
/// using `hljs-` prefixed CSS classes.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GFM options and the default syntax set.
    ///
    /// Loading the syntax definitions is the expensive part; callers should
    /// build one renderer and reuse it.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        options.parse.smart = true;

        // Documents are authored locally and trusted
        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Replaces the body of every `<code class="language-X">` element with
    /// highlighted markup.
    ///
    /// Blocks whose closing tag is missing are copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails on a line
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut copied = 0;
        let mut search_pos = 0;

        while let Some(found) = html[search_pos..].find(CODE_OPEN) {
            let open_start = search_pos + found;
            search_pos = open_start + 1;

            let lang_start = open_start + CODE_OPEN.len();
            let Some(lang_len) = html[lang_start..].find('"') else {
                continue;
            };
            let language = &html[lang_start..lang_start + lang_len];

            let Some(gt) = html[lang_start + lang_len..].find('>') else {
                continue;
            };
            let body_start = lang_start + lang_len + gt + 1;

            let Some(body_len) = html[body_start..].find(CODE_CLOSE) else {
                continue;
            };
            let body_end = body_start + body_len;

            let code = html_decode(&html[body_start..body_end]);
            let highlighted = self
                .highlight_code(&code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?;

            result.push_str(&html[copied..open_start]);
            result.push_str(CODE_OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CODE_CLOSE);

            copied = body_end + CODE_CLOSE.len();
            search_pos = copied;
        }

        result.push_str(&html[copied..]);
        Ok(result)
    }

    /// Highlights a code block, falling back to escaped text for unknown
    /// languages.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self.find_syntax(language) else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }
}

impl Render for MarkdownRenderer<'_> {
    fn render(&self, markdown: &str) -> Result<String> {
        let html = comrak::markdown_to_html(markdown, &self.options);
        self.highlight_code_blocks(&html)
    }
}

impl Default for MarkdownRenderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverses the entity escaping comrak applies inside code blocks.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

//! Mapping between rendered page URLs and their Markdown sources.

use log::error;

const MARKDOWN_EXT: &str = ".md";
const HTML_EXT: &str = ".html";

/// Returns the Markdown source URL for a rendered page URL.
///
/// Recognized shapes, checked in order:
/// - `index.html` becomes `README.md`
/// - `.slides.html` becomes `.md`
/// - `.html` becomes `.md`
/// - `.md` is returned as is
///
/// Only the first occurrence of the matched suffix is replaced. Index and
/// slide pages are matched before the generic `.html` case, otherwise
/// `index.html` would map to `index.md`.
///
/// # Arguments
///
/// * `url`: Page URL or path
///
/// # Returns
///
/// Markdown URL, or `url` unchanged when its shape is not recognized
pub fn markdown_url_from_url(url: &str) -> String {
    if url.contains("index.html") {
        url.replacen("index.html", "README.md", 1)
    } else if url.contains(".slides.html") {
        url.replacen(".slides.html", MARKDOWN_EXT, 1)
    } else if url.contains(HTML_EXT) {
        url.replacen(HTML_EXT, MARKDOWN_EXT, 1)
    } else if url.contains(MARKDOWN_EXT) {
        url.to_string()
    } else {
        error!("Unknown markdown source for url: {}", url);
        url.to_string()
    }
}

/// Returns the rendered page URL for a Markdown link.
///
/// Replaces the last `.md` occurrence with `.html`. Anything after it
/// (fragment, query string) is kept verbatim. Links without `.md` pass
/// through unchanged.
///
/// # Arguments
///
/// * `url`: Link target, typically an anchor `href`
///
/// # Returns
///
/// Rewritten URL
pub fn html_url_from_markdown_url(url: &str) -> String {
    match url.rfind(MARKDOWN_EXT) {
        Some(last) => {
            let rest = &url[last + MARKDOWN_EXT.len()..];
            format!("{}{}{}", &url[..last], HTML_EXT, rest)
        }
        None => url.to_string(),
    }
}

/// Whether the page URL names a slide deck (`*.slides.html`).
pub fn is_slides_url(url: &str) -> bool {
    url.contains(".slides.html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::Once;

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Keeps records per test thread so parallel tests do not see each other.
    struct RecordingLogger;

    impl Log for RecordingLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|r| {
                r.borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger;
    static INIT: Once = Once::new();

    fn captured<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("No other logger installed in unit tests");
            log::set_max_level(LevelFilter::Trace);
        });
        RECORDS.with(|r| r.borrow_mut().clear());
        let value = f();
        let records = RECORDS.with(|r| r.borrow_mut().drain(..).collect());
        (value, records)
    }

    fn errors(records: &[(Level, String)]) -> Vec<&str> {
        records
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    #[test]
    fn test_index_maps_to_readme() {
        assert_eq!(markdown_url_from_url("/docs/index.html"), "/docs/README.md");
        assert_eq!(markdown_url_from_url("index.html"), "README.md");
    }

    #[test]
    fn test_slides_maps_to_markdown() {
        assert_eq!(markdown_url_from_url("/talk.slides.html"), "/talk.md");
    }

    #[test]
    fn test_plain_html_maps_to_markdown() {
        assert_eq!(markdown_url_from_url("/page.html"), "/page.md");
        assert_eq!(
            markdown_url_from_url("https://example.com/guide/intro.html"),
            "https://example.com/guide/intro.md"
        );
    }

    #[test]
    fn test_markdown_url_is_unchanged() {
        assert_eq!(markdown_url_from_url("/page.md"), "/page.md");
    }

    #[test]
    fn test_unknown_shape_is_identity() {
        // Arrange
        let url = "/images/logo.png";

        // Act
        let result = markdown_url_from_url(url);

        // Assert
        assert_eq!(result, url, "Unrecognized URL should pass through");
    }

    #[test]
    fn test_unknown_shape_logs_one_error() {
        // Arrange
        let url = "/images/logo.png";

        // Act
        let (result, records) = captured(|| markdown_url_from_url(url));

        // Assert
        assert_eq!(result, url);
        assert_eq!(
            errors(&records),
            vec!["Unknown markdown source for url: /images/logo.png"]
        );
    }

    #[test]
    fn test_recognized_shapes_log_no_error() {
        for url in ["/index.html", "/talk.slides.html", "/page.html", "/page.md"] {
            // Act
            let (_, records) = captured(|| markdown_url_from_url(url));

            // Assert
            assert!(
                errors(&records).is_empty(),
                "{} should not log an error: {:?}",
                url,
                records
            );
        }
    }

    #[test]
    fn test_index_checked_before_generic_html() {
        // Arrange: both index.html and .html present
        let url = "/lessons/index.html";

        // Act
        let result = markdown_url_from_url(url);

        // Assert
        assert_eq!(result, "/lessons/README.md", "Index pages map to README");
    }

    #[test]
    fn test_slides_checked_before_generic_html() {
        assert_eq!(
            markdown_url_from_url("/lessons/ownership.slides.html"),
            "/lessons/ownership.md",
            "Slide pages should not map to .slides.md"
        );
    }

    #[test]
    fn test_only_first_occurrence_replaced() {
        assert_eq!(
            markdown_url_from_url("/a.html/b.html"),
            "/a.md/b.html",
            "Only the first .html is replaced"
        );
    }

    #[test]
    fn test_html_url_passthrough_without_markdown() {
        assert_eq!(html_url_from_markdown_url("/x.html"), "/x.html");
        assert_eq!(
            html_url_from_markdown_url("https://example.com"),
            "https://example.com"
        );
        assert_eq!(html_url_from_markdown_url("#section"), "#section");
    }

    #[test]
    fn test_html_url_replaces_last_markdown_occurrence() {
        // Arrange
        let url = "/a.md/b.md#frag";

        // Act
        let result = html_url_from_markdown_url(url);

        // Assert
        assert_eq!(result, "/a.md/b.html#frag");
    }

    #[test]
    fn test_html_url_preserves_query_suffix() {
        assert_eq!(
            html_url_from_markdown_url("notes.md?raw=1"),
            "notes.html?raw=1"
        );
    }

    #[test]
    fn test_html_url_simple_link() {
        assert_eq!(html_url_from_markdown_url("notes.md"), "notes.html");
        assert_eq!(html_url_from_markdown_url("../README.md"), "../README.html");
    }

    #[test]
    fn test_is_slides_url() {
        assert!(is_slides_url("/talk.slides.html"));
        assert!(!is_slides_url("/talk.html"));
        assert!(!is_slides_url("/talk.md"));
    }
}

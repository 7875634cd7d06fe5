use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use maud::Markup;
use mdview::{
    Config, ContentElement, Mode, PAGE_STYLESHEET, PageConfig, PageRenderer, SLIDES_STYLESHEET,
    SlideConfig, SourceFetcher, pages, slides,
};
use std::fs;
use std::path::Path;

/// Element id of the container rendered Markdown is injected into.
const CONTENT_ELEMENT_ID: &str = "content";

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(if config.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    config.validate().context("Invalid configuration")?;

    let output = config.output_path();
    let markup = match config.resolved_mode() {
        Mode::Slides => generate_slides(&config)?,
        Mode::Page | Mode::Auto => generate_page(&config)?,
    };

    write_output(&output, markup)?;
    info!("Generated: {}", output.display());

    if !config.no_open
        && let Err(e) = open::that(&output)
    {
        warn!("Failed to open {}: {:#}", output.display(), e);
    }

    Ok(())
}

/// Fetches and renders the Markdown source into an article page.
fn generate_page(config: &Config) -> Result<Markup> {
    let renderer = PageRenderer::new(SourceFetcher::new(config.fetch_timeout()));
    let mut content = ContentElement::new(CONTENT_ELEMENT_ID);

    let report = renderer.render_page(PageConfig {
        url: config.url.clone(),
        content: &mut content,
    })?;

    Ok(pages::document::generate(
        &config.document_title(),
        &config.url,
        &report.markdown_url,
        &content,
        &[PAGE_STYLESHEET],
    ))
}

/// Builds a reveal.js page pointed at the Markdown source.
fn generate_slides(config: &Config) -> Result<Markup> {
    let deck = slides::init(&SlideConfig {
        url: config.url.clone(),
        reveal_base: config.reveal_base.clone(),
    });

    pages::presentation::generate(
        &config.document_title(),
        &config.url,
        &deck,
        &[SLIDES_STYLESHEET],
    )
}

/// Writes the page and its stylesheets next to it.
fn write_output(output: &Path, markup: Markup) -> Result<()> {
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    mdview::write_css_assets(&dir.join("assets"))?;

    fs::write(output, markup.into_string())
        .with_context(|| format!("Failed to write {}", output.display()))
}

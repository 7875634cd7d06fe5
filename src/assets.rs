//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const NAV: &str = include_str!("../assets/nav.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");
const SLIDES: &str = include_str!("../assets/slides.css");

/// Stylesheet for rendered Markdown pages, relative to the output page.
pub const PAGE_STYLESHEET: &str = "assets/page.css";

/// Stylesheet layered over the reveal.js theme, relative to the output page.
pub const SLIDES_STYLESHEET: &str = "assets/slides.css";

/// Writes bundled CSS assets into `assets_dir`
///
/// # Errors
///
/// Returns error if the directory or a stylesheet cannot be written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir)
        .with_context(|| format!("Failed to create {}", assets_dir.display()))?;

    write_bundled(assets_dir, "page.css", &[BASE, NAV, MARKDOWN])?;
    write_bundled(assets_dir, "slides.css", &[BASE, NAV, SLIDES])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

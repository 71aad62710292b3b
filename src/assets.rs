//! Bundled page assets

use anyhow::{Context, Result};

use crate::highlight::theme_css;

const PAGE: &str = include_str!("../assets/page.css");

/// Client script that enables task checkboxes and persists their state.
///
/// Reads its settings from the `#checklist-settings` JSON block and expects
/// `#content`, `#print` and `#reset` in the page.
pub const CHECKLIST_JS: &str = include_str!("../assets/checklist.js");

/// Returns the complete inline stylesheet for a plan page
///
/// # Errors
///
/// Returns error if the syntax theme is unknown
pub fn page_css(theme: &str) -> Result<String> {
    let highlight = highlight_css(theme)?;
    Ok(bundle(&[PAGE, &highlight]))
}

/// Returns the stylesheet for highlighted code blocks
pub fn highlight_css(theme: &str) -> Result<String> {
    theme_css(theme).with_context(|| format!("Failed to build highlight CSS: {}", theme))
}

fn bundle(parts: &[&str]) -> String {
    parts.join("\n")
}

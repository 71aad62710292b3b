//! Build pipeline from Markdown input to written pages.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::pages::plan;

/// Marker file that stops GitHub Pages from running Jekyll over the docs directory.
const NOJEKYLL: &str = ".nojekyll";

/// Resolved output locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTargets {
    pub primary: PathBuf,
    pub docs_dir: PathBuf,
    pub docs_index: PathBuf,
    pub marker: PathBuf,
}

impl OutputTargets {
    /// Resolves targets from a primary HTML path and a docs directory.
    pub fn new(primary: impl Into<PathBuf>, docs_dir: impl Into<PathBuf>) -> Self {
        let docs_dir = docs_dir.into();
        Self {
            primary: primary.into(),
            docs_index: docs_dir.join("index.html"),
            marker: docs_dir.join(NOJEKYLL),
            docs_dir,
        }
    }
}

/// Resolves output targets for a configuration.
pub fn resolve_targets(config: &Config) -> OutputTargets {
    OutputTargets::new(config.output_path(), &config.docs_dir)
}

/// Writes the page to every target.
///
/// The same bytes go to the primary path and to `index.html` in the docs
/// directory, which is created when missing. An empty `.nojekyll` marker is
/// written next to it.
///
/// # Arguments
///
/// * `html`: Complete page HTML
/// * `targets`: Resolved output locations
///
/// # Returns
///
/// The two HTML paths written, primary first
///
/// # Errors
///
/// Returns error if any directory or file cannot be written
pub fn write_outputs(html: &str, targets: &OutputTargets) -> Result<Vec<PathBuf>> {
    if let Some(parent) = non_empty_parent(&targets.primary) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }
    write_file(&targets.primary, html)?;

    fs::create_dir_all(&targets.docs_dir).with_context(|| {
        format!(
            "Failed to create docs directory: {}",
            targets.docs_dir.display()
        )
    })?;
    write_file(&targets.docs_index, html)?;
    write_file(&targets.marker, "")?;

    Ok(vec![targets.primary.clone(), targets.docs_index.clone()])
}

/// Runs the full build for a configuration.
///
/// Reads the Markdown input, renders the plan page and writes it to every
/// output target.
///
/// # Returns
///
/// The HTML paths written
///
/// # Errors
///
/// Returns error if the input cannot be read, rendering fails, the theme is
/// unknown, or any output cannot be written
pub fn generate_plan(config: &Config) -> Result<Vec<PathBuf>> {
    let markdown = fs::read_to_string(&config.input).with_context(|| {
        format!("Failed to read markdown input: {}", config.input.display())
    })?;
    log::info!(
        "Read {} bytes of markdown from {}",
        markdown.len(),
        config.input.display()
    );

    let namespace = config.storage_namespace()?;
    let page = plan::generate(&markdown, &config.title, &namespace, &config.theme)
        .with_context(|| format!("Failed to build page for {}", config.input.display()))?;
    let html = page.into_string();

    let targets = resolve_targets(config);
    log::debug!("Output targets: {:?}", targets);

    write_outputs(&html, &targets)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

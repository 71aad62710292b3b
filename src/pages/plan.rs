//! Standalone checklist page for a Markdown plan

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use serde::Serialize;

use crate::assets::{CHECKLIST_JS, page_css};
use crate::components::layout::page_wrapper;
use crate::hash::content_hash;
use crate::markdown::MarkdownRenderer;

/// Settings handed to the client script as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSettings {
    pub hash: String,
    pub storage_key: String,
}

impl ChecklistSettings {
    /// Builds settings for a document hash under a storage namespace.
    ///
    /// The key embeds the hash, so editing the document starts a fresh
    /// checklist instead of attaching old ticks to shifted tasks.
    pub fn new(namespace: &str, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        Self {
            storage_key: format!("{}:checkboxes:{}", namespace, hash),
            hash,
        }
    }

    /// Serializes settings for a `<script>` data block.
    ///
    /// # Errors
    ///
    /// Returns error if JSON serialization fails
    pub fn to_script_json(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("Failed to serialize checklist settings")?;
        Ok(json.replace("</", "<\\/"))
    }
}

/// Data container for plan page generation.
pub struct PlanPageData<'a> {
    pub title: &'a str,
    pub markdown: &'a str,
    pub rendered_html: &'a str,
    pub settings: &'a ChecklistSettings,
    pub settings_json: &'a str,
    pub css: &'a str,
}

/// Generates the plan page for a Markdown document.
///
/// Hashes the source, renders it, and assembles the page with inline
/// styles and the checklist script.
///
/// # Arguments
///
/// * `markdown`: Markdown source text
/// * `title`: Page title
/// * `namespace`: Storage namespace for checklist state
/// * `theme`: Syntax theme for code blocks
///
/// # Errors
///
/// Returns error if rendering fails or the theme is unknown
///
/// # Examples
///
/// ```no_run
/// use planpage::pages::plan::generate;
///
/// let page = generate("- [ ] Order filament", "Plan", "plan", "InspiredGitHub")?;
/// assert!(page.into_string().contains("checkbox"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(markdown: &str, title: &str, namespace: &str, theme: &str) -> Result<Markup> {
    let hash = content_hash(markdown);
    log::debug!("Markdown hash: {}", hash);

    let renderer = MarkdownRenderer::new();
    let rendered_html = renderer
        .render(markdown)
        .context("Failed to render markdown")?;

    let settings = ChecklistSettings::new(namespace, hash);
    let settings_json = settings.to_script_json()?;
    let css = page_css(theme)?;

    Ok(plan_page(PlanPageData {
        title,
        markdown,
        rendered_html: &rendered_html,
        settings: &settings,
        settings_json: &settings_json,
        css: &css,
    }))
}

/// Builds complete plan page markup.
///
/// Rendered HTML is inserted unescaped into `#content`. The raw Markdown
/// only appears inside the collapsed view-source block, escaped by maud.
pub fn plan_page(data: PlanPageData<'_>) -> Markup {
    let body = html! {
        div class="wrap" {
            div class="topbar" {
                div class="brand" {
                    h1 { (data.title) }
                    p class="meta" { "Standalone (offline) HTML. Checkmarks save to this browser." }
                }
                div class="actions" {
                    button type="button" id="print" { "Print" }
                    button type="button" id="reset" { "Reset checkmarks" }
                }
            }

            div class="card" {
                div class="content" id="content" {
                    (PreEscaped(data.rendered_html))
                }
                div class="footer" {
                    span { "Saved locally in this browser" }
                    span id="foot" { "Checklist key: " (data.settings.hash) }
                }
            }

            details {
                summary { "View source Markdown" }
                pre class="md" { (data.markdown) }
            }
        }
    };

    let script = html! {
        script type="application/json" id="checklist-settings" {
            (PreEscaped(data.settings_json))
        }
        script { (PreEscaped(CHECKLIST_JS)) }
    };

    page_wrapper(data.title, data.css, body, script)
}

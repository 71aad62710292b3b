//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;

use crate::highlight::Highlighter;

/// Opening of a fenced code element as comrak emits it.
const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Enables tables, strikethrough, autolinks and task lists. Soft line
/// breaks stay soft and raw HTML is passed through, since the input is the
/// author's own document. Fenced code with a recognised language is
/// highlighted with CSS classes.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    highlighter: Highlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    pub fn new() -> Self {
        let mut options = Options::default();

        // GFM
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.render.hardbreaks = false;
        options.render.unsafe_ = true;

        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    /// Renders markdown content to HTML string.
    ///
    /// Task list items come out as disabled checkboxes; the page script
    /// enables them on load.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML with highlighted code blocks
    ///
    /// # Errors
    ///
    /// Returns error if syntax highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or rendering fails
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        self.render(&content)
    }

    /// Replaces the body of every `language-*` code element with highlighted
    /// markup. Malformed fragments are copied through untouched.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut copied_to = 0;
        let mut search_from = 0;

        while let Some(offset) = html[search_from..].find(CODE_OPEN) {
            let code_start = search_from + offset;
            let lang_start = code_start + CODE_OPEN.len();

            let Some(span) = locate_code_body(html, lang_start) else {
                search_from = lang_start;
                continue;
            };

            let language = &html[lang_start..span.lang_end];
            let code = unescape_code(&html[span.body_start..span.body_end]);
            let highlighted = self
                .highlighter
                .highlight(&code, language)
                .context("Failed to highlight code block")?;

            result.push_str(&html[copied_to..code_start]);
            result.push_str(CODE_OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CODE_CLOSE);

            copied_to = span.body_end + CODE_CLOSE.len();
            search_from = copied_to;
        }

        result.push_str(&html[copied_to..]);
        Ok(result)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offsets of one code element, relative to the whole document.
struct CodeSpan {
    lang_end: usize,
    body_start: usize,
    body_end: usize,
}

fn locate_code_body(html: &str, lang_start: usize) -> Option<CodeSpan> {
    let lang_end = lang_start + html[lang_start..].find('"')?;
    let body_start = lang_end + html[lang_end..].find('>')? + 1;
    let body_end = body_start + html[body_start..].find(CODE_CLOSE)?;
    Some(CodeSpan {
        lang_end,
        body_start,
        body_end,
    })
}

/// Reverses comrak's escaping of code block text.
fn unescape_code(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

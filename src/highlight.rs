//! Code block highlighting with syntect.

use anyhow::{Context, Result, anyhow};
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Class prefix shared by highlighted spans and the generated theme CSS.
const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hljs-" };

/// Highlights fenced code blocks into class annotated HTML.
///
/// Output carries CSS class names only, no inline colours. Pair it with
/// [`theme_css`] so the page stays self contained.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates highlighter with syntect's bundled syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code for the given fence language.
    ///
    /// Language is matched by token first (`rust`, `python`), then by file
    /// extension (`rs`, `py`). Unknown languages come back HTML escaped
    /// without any spans.
    ///
    /// # Arguments
    ///
    /// * `code`: Raw, unescaped source code
    /// * `language`: Fence info string language
    ///
    /// # Returns
    ///
    /// HTML fragment suitable for placing inside `<code>`
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            log::debug!("No syntax for fence language {:?}, leaving plain", language);
            return Ok(escape_code(code));
        };

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .with_context(|| format!("Failed to highlight {} line", language))?;
        }

        Ok(generator.finalize())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates stylesheet for highlighted spans from a bundled theme.
///
/// # Arguments
///
/// * `theme`: Theme name (InspiredGitHub, base16-ocean.light, Solarized (light), etc.)
///
/// # Errors
///
/// Returns error if the theme is not bundled with syntect or CSS generation fails
pub fn theme_css(theme: &str) -> Result<String> {
    let themes = ThemeSet::load_defaults();
    let selected = themes.themes.get(theme).ok_or_else(|| {
        let mut known: Vec<&str> = themes.themes.keys().map(String::as_str).collect();
        known.sort_unstable();
        anyhow!(
            "Unknown syntax theme: {} (available: {})",
            theme,
            known.join(", ")
        )
    })?;

    css_for_theme_with_class_style(selected, CLASS_STYLE)
        .with_context(|| format!("Failed to generate CSS for theme: {}", theme))
}

fn escape_code(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

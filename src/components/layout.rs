//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, html, head and body structure for a standalone page.
/// The stylesheet and script are inlined verbatim so the result opens
/// offline from any location.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `css`: Stylesheet placed in a `<style>` element
/// * `body`: Page-specific body markup
/// * `script`: Markup placed after the body content (usually `<script>` elements)
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, css: &str, body: Markup, script: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (body)
                (script)
            }
        }
    }
}

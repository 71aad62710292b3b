//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! Wraps comrak with the GFM extensions a plan document uses (tables,
//! strikethrough, autolinks, task lists) and syntect highlighting for
//! fenced code.

mod renderer;

pub use renderer::MarkdownRenderer;

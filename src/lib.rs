//! Standalone offline HTML checklist pages from Markdown plans.

mod assets;
pub mod components;
mod config;
mod generators;
mod hash;
mod highlight;
mod markdown;
pub mod pages;

pub use assets::{CHECKLIST_JS, highlight_css, page_css};
pub use config::{Config, DEFAULT_INPUT, DEFAULT_TITLE};
pub use generators::{OutputTargets, generate_plan, resolve_targets, write_outputs};
pub use hash::content_hash;
pub use highlight::{Highlighter, theme_css};
pub use markdown::MarkdownRenderer;
pub use pages::plan::ChecklistSettings;

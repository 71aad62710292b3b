//! Shared test utilities for integration tests.
//!
//! Provides a scratch workspace holding a Markdown plan, mirroring the
//! layout the binary expects when run without arguments.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Plan with headings, a table, nested tasks and characters that need escaping.
pub const SAMPLE_PLAN: &str = r#"# SJDC Makerspace

Implementation plan for the **makerspace** fit-out.

## Phase 1: Space & Safety

- [ ] Confirm room <B204> booking
- [x] Order fire extinguisher
  - [ ] Mount by exit
- [ ] Post "no solo work" signage

## Budget

| Item | Cost |
|------|------|
| Laser cutter | 4,500 |
| 3D printers | 2,400 |

```bash
echo "ready" && ls
```
"#;

/// Creates temporary directory containing `file_name` with `contents`.
///
/// # Returns
///
/// Temporary directory and the path of the written Markdown file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_plan_dir(file_name: &str, contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join(file_name);
    fs::write(&path, contents)?;
    Ok((dir, path))
}

/// Returns the slice of `page` between the content div and the footer.
pub fn content_block(page: &str) -> &str {
    let start = page.find("id=\"content\">").expect("content block");
    let end = page[start..].find("<div class=\"footer\">").expect("footer");
    &page[start..start + end]
}

/// Returns the inner text of the view-source block.
pub fn source_block(page: &str) -> &str {
    let open = "<pre class=\"md\">";
    let start = page.find(open).expect("source block") + open.len();
    let end = page[start..].find("</pre>").expect("source block end");
    &page[start..start + end]
}

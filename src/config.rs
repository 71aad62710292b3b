//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Markdown plan built when no input is given.
pub const DEFAULT_INPUT: &str = "SJDC_Makerspace_Implementation_Plan.md";

/// Page title used when `--title` is not given.
pub const DEFAULT_TITLE: &str = "SJDC Makerspace - Implementation Plan";

/// Command line configuration for planpage.
#[derive(Debug, Clone, Parser)]
#[command(name = "planpage", version, about, long_about = None)]
pub struct Config {
    /// Markdown input file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// HTML output file (defaults to the input path with an .html extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory that also receives index.html and a .nojekyll marker
    #[arg(long, default_value = "docs")]
    pub docs_dir: PathBuf,

    /// Page title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Syntax highlighting theme for code blocks (InspiredGitHub, base16-ocean.light, etc.)
    #[arg(long, default_value = "InspiredGitHub")]
    pub theme: String,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist or is a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Markdown input does not exist: {}", self.input.display());
        }
        if self.input.is_dir() {
            bail!("Markdown input is a directory: {}", self.input.display());
        }

        Ok(())
    }

    /// Returns the primary HTML output path.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("html"))
    }

    /// Returns the browser storage namespace, taken from the input file stem.
    ///
    /// # Errors
    ///
    /// Returns error if the input path has no file name or contains invalid UTF8.
    pub fn storage_namespace(&self) -> Result<String> {
        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| {
                format!(
                    "Cannot derive storage namespace from path: {}",
                    self.input.display()
                )
            })
            .map(String::from)
    }
}

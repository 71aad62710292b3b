//! End to end tests running the planpage binary.

mod common;

use anyhow::Result;
use common::{SAMPLE_PLAN, create_plan_dir};
use std::fs;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_planpage");

/// Tests the no-argument build against the default file names.
#[test]
fn test_default_paths_e2e() -> Result<()> {
    // Arrange
    let (dir, _) = create_plan_dir("SJDC_Makerspace_Implementation_Plan.md", SAMPLE_PLAN)?;

    // Act
    let output = Command::new(BIN).current_dir(dir.path()).output()?;

    // Assert
    assert!(
        output.status.success(),
        "Build should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote: SJDC_Makerspace_Implementation_Plan.html"), "{}", stdout);
    assert!(stdout.contains("index.html"), "{}", stdout);

    let primary = fs::read_to_string(dir.path().join("SJDC_Makerspace_Implementation_Plan.html"))?;
    let docs = fs::read_to_string(dir.path().join("docs/index.html"))?;
    assert_eq!(primary, docs);
    assert!(primary.contains("SJDC Makerspace - Implementation Plan"));
    assert!(dir.path().join("docs/.nojekyll").exists());

    Ok(())
}

/// Tests that a missing input exits non-zero and logs the error.
#[test]
fn test_missing_input_fails_e2e() -> Result<()> {
    // Arrange
    let dir = tempfile::TempDir::new()?;

    // Act
    let output = Command::new(BIN).current_dir(dir.path()).output()?;

    // Assert
    assert!(!output.status.success(), "Missing input should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SJDC_Makerspace_Implementation_Plan.md"),
        "Error should name the input: {}",
        stderr
    );
    assert!(!dir.path().join("docs").exists(), "Nothing should be written");

    Ok(())
}

/// Tests explicit arguments on the command line.
#[test]
fn test_explicit_arguments_e2e() -> Result<()> {
    // Arrange
    let (dir, input) = create_plan_dir("notes.md", "# Notes\n\n- [ ] one\n")?;
    let out = dir.path().join("site/notes.html");
    let docs = dir.path().join("pages");

    // Act
    let status = Command::new(BIN)
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("--docs-dir")
        .arg(&docs)
        .args(["--title", "Notes"])
        .status()?;

    // Assert
    assert!(status.success());
    let html = fs::read_to_string(&out)?;
    assert!(html.contains("<title>Notes</title>"));
    assert!(html.contains("notes:checkboxes:"));
    assert_eq!(html, fs::read_to_string(docs.join("index.html"))?);

    Ok(())
}

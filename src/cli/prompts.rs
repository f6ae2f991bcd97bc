//! Interactive prompts using dialoguer

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use dialoguer::Confirm;

/// Ask whether to open the produced file in a viewer.
///
/// Defaults to "no"; a prompt error (e.g. no interactive terminal) is
/// also treated as "no" so non-interactive runs never block.
pub fn confirm_open(output: &Path) -> bool {
    Confirm::new()
        .with_prompt(format!("View {} now?", output.display()))
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Open a file with the platform's default viewer application.
pub fn open_viewer(output: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    let status = Command::new(opener)
        .arg(output)
        .status()
        .with_context(|| format!("Failed to launch {}", opener))?;

    if !status.success() {
        anyhow::bail!("{} exited with {}", opener, status);
    }
    Ok(())
}

//! Wiki-only markup removal

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Section markers that only make sense on the wiki. References are
/// converted to footnotes by Pandoc anyway, so the empty section title
/// would otherwise survive into the rendered document.
pub const WIKI_ONLY_MARKERS: [&str; 2] = ["= Before Reading =", "= References ="];

/// Remove every occurrence of the wiki-only markers.
///
/// Literal substring removal, applied unconditionally - markers are
/// stripped wherever they appear, not only as section headers. Input
/// without markers comes back unchanged.
pub fn sanitize_markup(text: &str) -> String {
    let mut out = text.to_string();
    for marker in WIKI_ONLY_MARKERS {
        out = out.replace(marker, "");
    }
    out
}

/// Read the source file, strip wiki-only markers, and write the result
/// as a new file of the same name inside the workspace. The original
/// input is never touched.
pub fn sanitize_to_workspace(input: &Path, workspace: &Path) -> Result<PathBuf> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file {}", input.display()))?;

    let file_name = input
        .file_name()
        .with_context(|| format!("Input path {} has no file name", input.display()))?;
    let sanitized_path = workspace.join(file_name);

    fs::write(&sanitized_path, sanitize_markup(&text)).with_context(|| {
        format!(
            "Failed to write sanitized copy to {}",
            sanitized_path.display()
        )
    })?;
    Ok(sanitized_path)
}

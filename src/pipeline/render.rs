//! Final render step - intermediate markup to the target format

use std::path::Path;

use super::config::BuildConfig;
use super::convert::{run_converter, PandocError, PANDOC_BIN};
use crate::cli::DocType;

/// Build the explicit argument vector for the render invocation.
///
/// Kept as a pure function so the flag set can be asserted in tests
/// without running Pandoc. The workspace goes on the resource path so
/// bare image references in the intermediate Markdown resolve against
/// the staged copies.
pub fn render_args(config: &BuildConfig, intermediate: &Path, workspace: &Path) -> Vec<String> {
    let mut args = vec![
        intermediate.display().to_string(),
        "-o".to_string(),
        config.output_path.display().to_string(),
        // Table of contents
        "--toc".to_string(),
        // Firevogel by default for books
        format!("--template={}", config.doc_type.template()),
        // Make code blocks stay in page and look nice
        "--listings".to_string(),
        // Works better with CJK
        "--pdf-engine=xelatex".to_string(),
        "--toc-depth=3".to_string(),
        // Looks for templates in ./resources
        format!("--data-dir={}", config.resources_dir.display()),
        // Staged images live in the workspace
        format!("--resource-path={}", workspace.display()),
        "-V".to_string(),
        format!("lang={}", config.lang),
    ];

    if config.doc_type == DocType::Book {
        args.push("--top-level-division=chapter".to_string());
    }

    if config.veryverbose {
        args.push("--verbose".to_string());
    }

    args
}

/// Render the intermediate document to the final output file. The
/// output lands in the invoking directory, outside the workspace, so
/// it survives cleanup.
pub fn render(config: &BuildConfig, intermediate: &Path, workspace: &Path) -> Result<(), PandocError> {
    run_converter(PANDOC_BIN, &render_args(config, intermediate, workspace))
}

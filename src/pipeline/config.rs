//! Immutable build configuration resolved once at startup

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::{Cli, DocType};

/// Everything a pipeline stage needs to know about the current run.
///
/// Constructed once from the parsed CLI arguments and the invoking
/// directory, then passed by reference to each stage. Never mutated.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// The MediaWiki source file, as given on the command line
    pub input: PathBuf,
    /// Pandoc input format tag (e.g. "mediawiki")
    pub from_format: String,
    /// Pandoc output format tag (e.g. "pdf")
    pub to_format: String,
    pub doc_type: DocType,
    /// BCP 47-ish language tag (e.g. "en", "zh")
    pub lang: String,
    pub debug: bool,
    pub veryverbose: bool,
    pub no_open: bool,
    /// Directory the build was invoked from; final output lands here
    pub build_dir: PathBuf,
    /// Template/header search path (`<build_dir>/resources`)
    pub resources_dir: PathBuf,
    /// Image source directory (`<build_dir>/images`)
    pub images_dir: PathBuf,
    /// File name of the intermediate Markdown document
    pub intermediate_name: String,
    /// Final output path (`<build_dir>/<stem>.<to>`)
    pub output_path: PathBuf,
}

impl BuildConfig {
    /// Resolve the configuration against an explicit build directory.
    pub fn resolve(cli: &Cli, build_dir: &Path) -> Self {
        BuildConfig {
            input: cli.input.clone(),
            from_format: cli.from_format.clone(),
            to_format: cli.to.clone(),
            doc_type: cli.doc_type,
            lang: cli.lang.clone(),
            debug: cli.debug,
            veryverbose: cli.veryverbose,
            no_open: cli.no_open,
            build_dir: build_dir.to_path_buf(),
            resources_dir: build_dir.join("resources"),
            images_dir: build_dir.join("images"),
            intermediate_name: cli.intermediate_file_name(),
            output_path: build_dir.join(cli.output_file_name()),
        }
    }

    /// Resolve against the current working directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let build_dir =
            std::env::current_dir().context("Failed to determine the current directory")?;
        Ok(Self::resolve(cli, &build_dir))
    }

    /// Path of the header template expected under the resources directory.
    pub fn header_template_path(&self) -> PathBuf {
        self.resources_dir.join("header.yaml")
    }
}

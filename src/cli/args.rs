//! Command-line argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Mwbook - Build publishable documents from MediaWiki sources via Pandoc
#[derive(Parser, Debug)]
#[command(name = "mwbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The MediaWiki file you want to convert
    pub input: PathBuf,

    /// Format you want to export to. Accepts any output format accepted
    /// by Pandoc.
    #[arg(long, default_value = "pdf")]
    pub to: String,

    /// Format of the input file. Accepts any input format accepted by
    /// Pandoc.
    #[arg(short = 'f', long = "fromformat", default_value = "mediawiki")]
    pub from_format: String,

    /// What type of document you want. Books are separated and numbered
    /// by chapter, and have larger inner margins.
    #[arg(long = "type", value_enum, default_value_t = DocType::Book)]
    pub doc_type: DocType,

    /// Document language, e.g. en or zh. Drives date localization and
    /// the CJK font override in the metadata header.
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Keep temporary files for debugging purposes and print the full
    /// Pandoc invocation
    #[arg(long, default_value = "false")]
    pub debug: bool,

    /// Turn on Pandoc's verbose output
    #[arg(long, default_value = "false")]
    pub veryverbose: bool,

    /// Skip the "open in viewer" prompt after a successful build
    #[arg(long, default_value = "false")]
    pub no_open: bool,
}

/// Document type, selecting the Pandoc template profile
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocType {
    /// Single continuous document, no chapter numbering
    Article,
    /// Chapter-divided document with book margins
    Book,
}

impl DocType {
    /// Pandoc template name for this document type
    pub fn template(&self) -> &'static str {
        match self {
            DocType::Article => "eisvogel",
            DocType::Book => "firevogel",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Article => "article",
            DocType::Book => "book",
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Cli {
    /// Name of the intermediate Markdown file, derived from the input
    /// file name (e.g. guide.mediawiki -> guide.md).
    pub fn intermediate_file_name(&self) -> String {
        format!("{}.md", self.input_stem())
    }

    /// Name of the final output file, with the target format's
    /// extension substituted for the source extension
    /// (e.g. guide.mediawiki -> guide.pdf).
    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.input_stem(), self.to)
    }

    fn input_stem(&self) -> &str {
        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output")
    }
}

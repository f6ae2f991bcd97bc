//! Mwbook: MediaWiki Book Builder
//!
//! A library for turning MediaWiki source text into publishable
//! documents (PDF by default) by sanitizing wiki-only markup, staging
//! images, composing a localized metadata header, and driving Pandoc.

pub mod cli;
pub mod pipeline;
pub mod utils;

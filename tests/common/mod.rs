//! Shared test utilities and fixture generators

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A MediaWiki source containing both wiki-only markers.
pub const SAMPLE_WIKI: &str = "\
= Before Reading =

This section only matters on the wiki.

== Installation ==

Install the thing.

= References =
";

/// A header template in the shape resources/header.yaml ships with.
pub const SAMPLE_TEMPLATE: &str = "\
---
title: The Guide
author: The Team
date: $DATE
mainfont: Liberation Serif
---";

/// Create a build directory populated like a real invocation site:
/// an `images/` tree, a `resources/header.yaml` template, and a
/// `guide.mediawiki` source file. Returns the tempdir (keep it alive)
/// and the source path.
#[allow(dead_code)]
pub fn create_build_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();

    let images = dir.path().join("images");
    fs::create_dir(&images).unwrap();
    fs::write(images.join("cover.png"), b"not a real png").unwrap();

    let resources = dir.path().join("resources");
    fs::create_dir(&resources).unwrap();
    fs::write(resources.join("header.yaml"), SAMPLE_TEMPLATE).unwrap();

    let input = dir.path().join("guide.mediawiki");
    fs::write(&input, SAMPLE_WIKI).unwrap();

    (dir, input)
}

/// Like [`create_build_dir`] but without `resources/`, for exercising
/// the missing-template warning path.
#[allow(dead_code)]
pub fn create_build_dir_without_resources() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("guide.mediawiki");
    fs::write(&input, SAMPLE_WIKI).unwrap();
    (dir, input)
}

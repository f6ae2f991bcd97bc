//! Temporary workspace management and image staging

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Ephemeral working directory owned by a single build run.
///
/// Holds the staged images, the sanitized source copy, and the
/// intermediate Markdown document. Dropped normally it is deleted;
/// call [`Workspace::persist`] to keep it on disk (debug runs and
/// converter failures) or [`Workspace::close`] to delete it eagerly
/// and observe any deletion error.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh isolated temp directory. Failure here is fatal
    /// for the run - there is nowhere to stage files.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("mwbook-")
            .tempdir()
            .context("Failed to create temporary workspace directory")?;
        Ok(Workspace { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Copy the images tree into the workspace. Best-effort: the
    /// caller reports a warning on failure and the run continues with
    /// whatever was copied (possibly nothing).
    pub fn stage_images(&self, images_dir: &Path) -> Result<usize> {
        if !images_dir.is_dir() {
            anyhow::bail!("Images directory {} not found", images_dir.display());
        }
        copy_tree(images_dir, self.path())
            .with_context(|| format!("Failed to copy images from {}", images_dir.display()))
    }

    /// Keep the directory on disk and return its path. Used when
    /// `--debug` asks for retention or a converter failure leaves
    /// intermediates worth inspecting.
    pub fn persist(self) -> PathBuf {
        self.dir.keep()
    }

    /// Delete the workspace, reporting any deletion error instead of
    /// swallowing it the way a plain drop would.
    pub fn close(self) -> io::Result<()> {
        self.dir.close()
    }
}

/// Recursively copy the contents of `src` into `dst`, returning the
/// number of files copied. `dst` must already exist.
fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

//! Clean logic
//!
//! Removes everything a build generates in the widget source directory:
//! the relocated module tree, the entry points and the rendered manifests.
//! Templates and compiler output are left alone.

use std::path::Path;

use crate::config::defaults;
use crate::core::builder::generated_files;
use crate::core::manifest::WidgetConfig;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Result of clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Paths that were removed, relative to the widget source directory
    pub removed: Vec<String>,
    /// Paths that didn't exist (skipped)
    pub skipped: Vec<String>,
}

/// Clean build output for `widget` from `src_dir`
pub fn clean_widget(src_dir: &Path, widget: &WidgetConfig) -> Result<CleanResult, FilesystemError> {
    let mut result = CleanResult::default();

    let gleam_dir = src_dir.join(defaults::GLEAM_DEST_DIR);
    if gleam_dir.exists() {
        filesystem::remove_dir_all(&gleam_dir)?;
        result.removed.push(format!("{}/", defaults::GLEAM_DEST_DIR));
    } else {
        result.skipped.push(format!("{}/", defaults::GLEAM_DEST_DIR));
    }

    for file in generated_files(widget) {
        let display = file.to_string_lossy().replace('\\', "/");
        if filesystem::remove_file(&src_dir.join(&file))? {
            result.removed.push(display);
        } else {
            result.skipped.push(display);
        }
    }

    Ok(result)
}

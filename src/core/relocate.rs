//! Relocation of compiled modules into the widget source tree
//!
//! The compiler writes `<output>/<package>/...`, `<output>/gleam_stdlib/...`
//! and `<output>/prelude.mjs`. The widget tooling wants all of it under
//! `<src>/gleam`, with FFI helpers next to the modules importing them and
//! relative imports patched to match.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults;
use crate::core::layout::{BuildLayout, LayoutMode};
use crate::core::rewrite::{self, RewriteTable};
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Files touched by relocation
#[derive(Debug, Clone, Default, Serialize)]
pub struct Relocation {
    /// Destination paths of every copied file
    pub copied: Vec<PathBuf>,
    /// Modules whose imports were rewritten
    pub rewritten: Vec<PathBuf>,
}

/// Remove and recreate the relocated module tree
///
/// Starting from an empty directory keeps repeated builds identical.
pub fn reset_dest(dest: &Path) -> Result<(), FilesystemError> {
    filesystem::remove_dir_all(dest)?;
    filesystem::create_dir_all(dest)
}

/// Relocate the compiler output according to the layout mode
pub fn relocate(layout: &BuildLayout) -> Result<Relocation, FilesystemError> {
    let dest = layout.gleam_dest_dir();
    reset_dest(&dest)?;

    let mut relocation = Relocation::default();
    match layout.mode {
        LayoutMode::Nested => {
            copy_nested(layout, &dest, &mut relocation.copied)?;
            let modules = RewriteTable::nested_modules();
            let stdlib = RewriteTable::nested_stdlib();
            relocation.rewritten = rewrite::rewrite_tree(&dest, |path| {
                if rewrite::is_under(&dest, path, defaults::STDLIB_DIR) {
                    &stdlib
                } else {
                    &modules
                }
            })?;
        }
        LayoutMode::Flat => {
            copy_flat(layout, &dest, &mut relocation.copied)?;
            relocation.rewritten = rewrite::rewrite_top_level(&dest, &RewriteTable::flat())?;
        }
    }

    tracing::info!(
        "Relocated {} files ({} rewritten) into {}",
        relocation.copied.len(),
        relocation.rewritten.len(),
        dest.display()
    );
    Ok(relocation)
}

fn copy_entry(from: &Path, to: &Path, copied: &mut Vec<PathBuf>) -> Result<(), FilesystemError> {
    if from.is_dir() {
        copied.extend(filesystem::copy_dir(from, to)?);
    } else {
        filesystem::copy_file(from, to)?;
        copied.push(to.to_path_buf());
    }
    Ok(())
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Stdlib and prelude are placed the same way in both layouts
fn copy_runtime(
    layout: &BuildLayout,
    dest: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), FilesystemError> {
    let stdlib = layout.stdlib_dir();
    if stdlib.is_dir() {
        copied.extend(filesystem::copy_dir(&stdlib, &dest.join(defaults::STDLIB_DIR))?);
    } else {
        tracing::debug!("No standard library at {}", stdlib.display());
    }

    let prelude = layout.prelude_path();
    if prelude.is_file() {
        copy_entry(&prelude, &dest.join(defaults::PRELUDE_FILE), copied)?;
    } else {
        tracing::debug!("No prelude at {}", prelude.display());
    }
    Ok(())
}

fn copy_nested(
    layout: &BuildLayout,
    dest: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), FilesystemError> {
    let package_dir = layout.package_dir();
    if package_dir.is_dir() {
        for entry in filesystem::list_dir(&package_dir)? {
            if let Some(name) = file_name(&entry) {
                copy_entry(&entry, &dest.join(name), copied)?;
            }
        }
    } else {
        tracing::debug!("No package directory at {}", package_dir.display());
    }

    if layout.compiler_output_dir.is_dir() {
        for entry in filesystem::list_dir(&layout.compiler_output_dir)? {
            let Some(name) = file_name(&entry) else {
                continue;
            };
            if entry.is_file() && rewrite::is_module(&entry) && name != defaults::PRELUDE_FILE {
                copy_entry(&entry, &dest.join(name), copied)?;
            }
        }
    }

    copy_runtime(layout, dest, copied)?;

    for placement in &layout.ffi_placements {
        let helper = layout.ffi_dir.join(&placement.file);
        let module_dir = dest.join(&placement.module_dir);
        if !helper.is_file() {
            continue;
        }
        if module_dir.is_dir() {
            copy_entry(&helper, &module_dir.join(&placement.file), copied)?;
        } else {
            tracing::debug!(
                "Skipping {}: module directory {} not present",
                placement.file,
                placement.module_dir
            );
        }
    }
    Ok(())
}

fn copy_flat(
    layout: &BuildLayout,
    dest: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), FilesystemError> {
    let package_dir = layout.package_dir();
    if package_dir.is_dir() {
        for entry in filesystem::list_dir(&package_dir)? {
            if entry.is_file() && rewrite::is_module(&entry) {
                if let Some(name) = file_name(&entry) {
                    copy_entry(&entry, &dest.join(name), copied)?;
                }
            }
        }
    } else {
        tracing::debug!("No package directory at {}", package_dir.display());
    }

    copy_runtime(layout, dest, copied)?;

    if layout.ffi_dir.is_dir() {
        for entry in filesystem::list_dir(&layout.ffi_dir)? {
            if let Some(name) = file_name(&entry) {
                copy_entry(&entry, &dest.join(name), copied)?;
            }
        }
    }
    Ok(())
}

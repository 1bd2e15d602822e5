//! Import path rewriting
//!
//! Compiled modules reference each other with relative paths that are only
//! correct inside the compiler's output tree. Once the modules are moved
//! into the widget source tree those paths are patched with a small table
//! of literal substitutions, applied line by line. The module syntax is
//! never parsed.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Extension of the files that get rewritten
pub const MODULE_EXTENSION: &str = "mjs";

/// Ordered table of literal `(from, to)` substitutions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteTable {
    rules: Vec<(String, String)>,
}

impl RewriteTable {
    /// Create a table from `(from, to)` pairs
    pub fn new<I, F, T>(rules: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .filter(|(from, _)| !from.is_empty())
                .collect(),
        }
    }

    /// Table for modules of the compiled project in the nested layout
    pub fn nested_modules() -> Self {
        Self::new([
            ("../js_ffi/", "./"),
            ("../../gleam_stdlib/", "../gleam_stdlib/"),
            ("../prelude.mjs", "./prelude.mjs"),
        ])
    }

    /// Table for standard library modules in the nested layout
    ///
    /// The stdlib sits one level below the prelude both before and after
    /// relocation, so its prelude import is kept as is.
    pub fn nested_stdlib() -> Self {
        Self::new([("../prelude.mjs", "../prelude.mjs")])
    }

    /// Table for the flat layout
    pub fn flat() -> Self {
        Self::new([
            ("../gleam_stdlib/", "./gleam_stdlib/"),
            ("../js_ffi/", "./"),
            ("../prelude.mjs", "./prelude.mjs"),
        ])
    }

    /// Apply every rule, in order, to one line
    pub fn apply_line(&self, line: &str) -> String {
        self.rules
            .iter()
            .fold(line.to_string(), |acc, (from, to)| acc.replace(from, to))
    }

    /// Apply the table to every line of `content`, keeping line endings
    pub fn apply(&self, content: &str) -> String {
        content
            .split_inclusive('\n')
            .map(|line| self.apply_line(line))
            .collect()
    }

    /// Rewrite a file in place; returns whether the content changed
    pub fn rewrite_file(&self, path: &Path) -> Result<bool, FilesystemError> {
        let content = filesystem::read_file(path)?;
        let rewritten = self.apply(&content);
        if rewritten == content {
            return Ok(false);
        }
        filesystem::write_file(path, &rewritten)?;
        tracing::debug!("Rewrote imports: {}", path.display());
        Ok(true)
    }
}

/// Whether a path names a compiled module
pub fn is_module(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MODULE_EXTENSION)
}

/// Whether `path` lies inside a directory named `dir_name` below `root`
pub fn is_under(root: &Path, path: &Path, dir_name: &str) -> bool {
    path.strip_prefix(root)
        .map(|rel| rel.components().any(|c| c.as_os_str() == dir_name))
        .unwrap_or(false)
}

/// Rewrite every module below `root`, choosing the table per file.
///
/// Returns the files whose content changed.
pub fn rewrite_tree<'t, F>(root: &Path, table_for: F) -> Result<Vec<PathBuf>, FilesystemError>
where
    F: Fn(&Path) -> &'t RewriteTable,
{
    let mut changed = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: e.path().unwrap_or(root).to_path_buf(),
            error: e.to_string(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && is_module(path)
            && table_for(path).rewrite_file(path)?
        {
            changed.push(path.to_path_buf());
        }
    }
    Ok(changed)
}

/// Rewrite only the modules directly inside `dir`
pub fn rewrite_top_level(dir: &Path, table: &RewriteTable) -> Result<Vec<PathBuf>, FilesystemError> {
    let mut changed = Vec::new();
    for path in filesystem::list_dir(dir)? {
        if path.is_file() && is_module(&path) && table.rewrite_file(&path)? {
            changed.push(path);
        }
    }
    Ok(changed)
}

//! Content digest of generated output
//!
//! A SHA-256 over the relative path and bytes of every generated file.
//! Paths are hashed relative to a base directory and in sorted order, so
//! the digest only changes when generated content does.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Every regular file below `root`, sorted
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, FilesystemError> {
    if !root.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: e.path().unwrap_or(root).to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Hash `files`, identifying each by its path relative to `base`
pub fn digest_files(base: &Path, files: &[PathBuf]) -> Result<String, FilesystemError> {
    let mut entries: Vec<(String, &PathBuf)> = files
        .iter()
        .map(|path| {
            let rel = path.strip_prefix(base).unwrap_or(path);
            (rel.to_string_lossy().replace('\\', "/"), path)
        })
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.dedup_by(|a, b| a.0 == b.0);

    let mut hasher = Sha256::new();
    for (rel, path) in entries {
        let bytes = std::fs::read(path).map_err(|e| FilesystemError::ReadFile {
            path: path.clone(),
            error: e.to_string(),
        })?;
        hasher.update(rel.as_bytes());
        hasher.update([0u8]);
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(&bytes);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_digest_is_stable_and_order_independent() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.mjs");
        let b = dir.path().join("sub/b.mjs");
        std::fs::create_dir_all(b.parent().unwrap()).unwrap();
        std::fs::write(&a, "a").unwrap();
        std::fs::write(&b, "b").unwrap();

        let one = digest_files(dir.path(), &[a.clone(), b.clone()]).unwrap();
        let two = digest_files(dir.path(), &[b, a]).unwrap();
        assert_eq!(one, two);
        assert_eq!(one.len(), 64);
    }

    #[test]
    fn test_digest_changes_with_content() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.mjs");
        std::fs::write(&a, "a").unwrap();
        let before = digest_files(dir.path(), std::slice::from_ref(&a)).unwrap();
        std::fs::write(&a, "A").unwrap();
        let after = digest_files(dir.path(), std::slice::from_ref(&a)).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_digest_independent_of_base_location() {
        let one = TempDir::new().unwrap();
        let two = TempDir::new().unwrap();
        for dir in [&one, &two] {
            std::fs::write(dir.path().join("x.js"), "same").unwrap();
        }
        assert_eq!(
            digest_files(one.path(), &collect_files(one.path()).unwrap()).unwrap(),
            digest_files(two.path(), &collect_files(two.path()).unwrap()).unwrap()
        );
    }

    #[test]
    fn test_collect_files_missing_root() {
        let dir = TempDir::new().unwrap();
        assert!(collect_files(&dir.path().join("none")).unwrap().is_empty());
    }
}

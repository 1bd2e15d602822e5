//! Template initialization logic
//!
//! Writes the default manifest templates into a project's templates
//! directory so a first build has something to render.

use std::path::{Path, PathBuf};

use crate::core::template::DEFAULT_TEMPLATES;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Result of initialization
#[derive(Debug, Default)]
pub struct InitResult {
    /// Templates written
    pub written: Vec<PathBuf>,
    /// Templates that already existed and were kept
    pub kept: Vec<PathBuf>,
}

/// Write default templates into `templates_dir`
///
/// Existing files are kept unless `force` is set.
pub fn init_templates(templates_dir: &Path, force: bool) -> Result<InitResult, FilesystemError> {
    let mut result = InitResult::default();

    for (name, content) in DEFAULT_TEMPLATES {
        let path = templates_dir.join(name);
        if path.exists() && !force {
            tracing::info!("Keeping existing template {}", path.display());
            result.kept.push(path);
            continue;
        }
        filesystem::write_file(&path, content)?;
        tracing::info!("Wrote template {}", path.display());
        result.written.push(path);
    }

    Ok(result)
}

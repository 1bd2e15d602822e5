//! Init command implementation
//!
//! Implements `mxwidget init` to write default manifest templates.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{self, status};
use crate::core::init::init_templates;
use crate::core::layout::{BuildLayout, Overrides};

/// Execute the init command
pub fn execute(project_dir: &Path, force: bool) -> Result<()> {
    let layout = BuildLayout::load(project_dir, &Overrides::default())
        .context("Failed to load project configuration")?;

    let result = init_templates(&layout.templates_dir, force).with_context(|| {
        format!(
            "Failed to write templates to {}",
            layout.templates_dir.display()
        )
    })?;

    if output::is_json() {
        let value = serde_json::json!({ "written": result.written, "kept": result.kept });
        println!("{value}");
        return Ok(());
    }

    for path in &result.written {
        output::print_status(status::SUCCESS, &format!("Created {}", path.display()));
    }
    for path in &result.kept {
        output::print_status(
            status::INFO,
            &format!("Kept existing {} (use --force to overwrite)", path.display()),
        );
    }
    Ok(())
}
